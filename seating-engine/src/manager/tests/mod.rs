use super::*;
use crate::plan::verify;
use shared::models::TableShape;

fn create_test_manager() -> PlanManager {
    PlanManager::new(EngineConfig::from_lookup(|_| None))
}

fn sample_guests() -> Vec<GuestImport> {
    vec![
        GuestImport::new("John", "Doe").with_id("g1"),
        GuestImport::new("Jane", "Smith").with_id("g2"),
        GuestImport::new("Robert", "Johnson").with_id("g3"),
        GuestImport::new("Emily", "Williams").with_id("g4"),
    ]
}

/// Manager holding four guests and two tables: t1 (square, 4) and t2 (circle, 6)
fn create_seeded_manager() -> PlanManager {
    let mut manager = create_test_manager();
    manager.import_guests(sample_guests());
    manager.add_table(TableDraft::new(4, TableShape::Square).with_id("t1"));
    manager.add_table(TableDraft::new(6, TableShape::Circle).with_id("t2"));
    manager
}

fn assert_valid(plan: &Plan) {
    if let Err(violation) = verify(plan) {
        panic!("invariant violated: {violation}");
    }
}

fn occupant<'a>(plan: &'a Plan, table_id: &str, seat_index: u32) -> Option<&'a str> {
    plan.table(table_id).and_then(|t| t.occupant(seat_index))
}
