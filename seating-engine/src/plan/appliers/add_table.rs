//! AddTable applier
//!
//! Appends a new empty table. Missing or invalid draft fields fall back
//! to the table defaults.

use super::finite;
use crate::plan::traits::PlanApplier;
use shared::models::{DEFAULT_SEATS, MAX_SEATS, Table};
use shared::plan::{Plan, TableDraft};
use shared::util::IdRegistry;
use tracing::debug;

/// AddTable applier
pub struct AddTableApplier {
    pub draft: TableDraft,
}

impl AddTableApplier {
    fn seat_count(&self) -> u32 {
        match self.draft.seats {
            Some(seats) if seats > 0 => seats.min(i64::from(MAX_SEATS)) as u32,
            _ => DEFAULT_SEATS,
        }
    }
}

impl PlanApplier for AddTableApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let draft = &self.draft;
        let seats = self.seat_count();

        let mut ids = IdRegistry::with_existing(plan.tables.iter().map(|t| t.id.as_str()));
        let id = ids.claim(draft.id.as_deref(), "table");

        let name = match draft.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Table {}", plan.tables.len() + 1),
        };

        let mut table = Table::new(id, name, draft.shape.unwrap_or_default(), seats);
        if let Some(x) = finite(draft.x) {
            table.x = x;
        }
        if let Some(y) = finite(draft.y) {
            table.y = y;
        }
        if let Some(width) = finite(draft.width) {
            table.width = width;
        }
        if let Some(height) = finite(draft.height) {
            table.height = height;
        }
        if let Some(rotation) = draft.rotation {
            table.rotation = Table::normalize_rotation(rotation);
        }

        debug!(
            table_id = %table.id,
            shape = %table.shape,
            seats = table.seats,
            "[AddTable] Table added"
        );

        let mut next = plan.clone();
        next.tables.push(table);
        Some(next)
    }
}
