//! Seating plan state engine
//!
//! - **appliers**: one pure applier per action kind
//! - **reducer**: `(Plan, PlanAction) -> Plan`, identity-preserving on no-ops
//! - **invariants**: occupancy / lock maintenance and verification
//! - **normalizer**: rebuilds a valid plan from arbitrary JSON
//!
//! # Data Flow
//!
//! ```text
//! PlanAction → ApplierAction → PlanApplier::apply → Some(next) → Arc<Plan>
//!                                                 → None       → same Arc
//! ```

// `traits` must come first: enum_dispatch expands the trait before the enum
pub mod traits;

pub mod appliers;
pub mod invariants;
pub mod normalizer;
pub mod reducer;

// Re-exports
pub use invariants::{InvariantViolation, verify};
pub use normalizer::normalize_plan;
pub use reducer::reduce;
pub use traits::PlanApplier;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::invariants::sync_seated_flags;
    use shared::models::{Guest, Table, TableShape};
    use shared::plan::Plan;

    pub fn table(id: &str, seats: u32) -> Table {
        Table::new(id, format!("Table {id}"), TableShape::Square, seats)
    }

    /// Tables t1 (4 seats) and t2 (6 seats), guests g1..g3, nobody seated
    pub fn sample_plan() -> Plan {
        Plan {
            guests: vec![
                Guest::new("g1", "John Doe"),
                Guest::new("g2", "Jane Smith"),
                Guest::new("g3", "Robert Johnson"),
            ],
            tables: vec![table("t1", 4), table("t2", 6)],
            ..Plan::default()
        }
    }

    /// Put `guest_id` on a seat directly, keeping flags in sync
    pub fn seated(mut plan: Plan, table_id: &str, seat_index: usize, guest_id: &str) -> Plan {
        if let Some(table) = plan.tables.iter_mut().find(|t| t.id == table_id) {
            table.guests[seat_index] = Some(guest_id.to_string());
        }
        sync_seated_flags(&mut plan.guests, &plan.tables);
        plan
    }
}
