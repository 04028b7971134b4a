//! ImportGuests applier
//!
//! Replaces the guest list wholesale. Every seat is emptied (seat counts
//! are kept) and every lock is released, so nobody is seated afterwards.

use crate::plan::traits::PlanApplier;
use shared::models::{Guest, GuestImport};
use shared::plan::Plan;
use shared::util::IdRegistry;
use tracing::debug;

/// ImportGuests applier
pub struct ImportGuestsApplier {
    pub guests: Vec<GuestImport>,
}

impl PlanApplier for ImportGuestsApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let mut ids = IdRegistry::new();
        let guests: Vec<Guest> = self
            .guests
            .iter()
            .map(|import| {
                let id = ids.claim(import.id.as_deref(), "guest");
                Guest::new(id, import.display_name())
            })
            .collect();

        let mut tables = plan.tables.clone();
        for table in &mut tables {
            table.clear_seats();
        }

        debug!(
            imported = guests.len(),
            tables = tables.len(),
            "[ImportGuests] Guest list replaced"
        );

        Some(Plan {
            guests,
            tables,
            special_areas: plan.special_areas.clone(),
            locked_chairs: Default::default(),
        })
    }
}
