//! ResizeTable applier
//!
//! Merges a partial update into a table. Changing the seat count keeps
//! occupants whose seat still exists; anyone beyond the new count is
//! unseated and locks past the end are dropped.

use super::finite;
use crate::plan::invariants::{prune_locked_chairs, sync_seated_flags};
use crate::plan::traits::PlanApplier;
use shared::models::Table;
use shared::plan::{Plan, TableUpdate};
use tracing::debug;

/// ResizeTable applier
pub struct ResizeTableApplier {
    pub table_id: String,
    pub updates: TableUpdate,
}

impl ResizeTableApplier {
    fn merged(&self, table: &Table) -> Table {
        let updates = &self.updates;
        let mut table = table.clone();
        if let Some(name) = &updates.name {
            table.name = name.clone();
        }
        if let Some(shape) = updates.shape {
            table.shape = shape;
        }
        if let Some(x) = finite(updates.x) {
            table.x = x;
        }
        if let Some(y) = finite(updates.y) {
            table.y = y;
        }
        if let Some(width) = finite(updates.width) {
            table.width = width;
        }
        if let Some(height) = finite(updates.height) {
            table.height = height;
        }
        if let Some(radius) = finite(updates.radius) {
            table.radius = radius;
        }
        if let Some(rotation) = updates.rotation {
            table.rotation = Table::normalize_rotation(rotation);
        }
        if let Some(seats) = updates.seats {
            table.set_seat_count(seats);
        }
        table
    }
}

impl PlanApplier for ResizeTableApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let index = plan.table_position(&self.table_id)?;
        let current = &plan.tables[index];
        let table = self.merged(current);
        if &table == current {
            return None;
        }

        let seats_changed = table.seats != current.seats;
        let mut next = plan.clone();
        next.tables[index] = table;

        if seats_changed {
            sync_seated_flags(&mut next.guests, &next.tables);
            let pruned = prune_locked_chairs(&mut next.locked_chairs, &next.tables);
            debug!(
                table_id = %self.table_id,
                seats = next.tables[index].seats,
                pruned_locks = pruned,
                "[ResizeTable] Seat count changed"
            );
        } else {
            debug!(table_id = %self.table_id, "[ResizeTable] Table updated");
        }
        Some(next)
    }
}
