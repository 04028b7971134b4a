//! AddSpecialArea applier

use super::finite;
use crate::plan::traits::PlanApplier;
use shared::models::SpecialArea;
use shared::plan::{AreaDraft, Plan};
use shared::util::IdRegistry;
use tracing::debug;

/// AddSpecialArea applier
pub struct AddSpecialAreaApplier {
    pub draft: AreaDraft,
}

impl PlanApplier for AddSpecialAreaApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let draft = &self.draft;
        let mut ids =
            IdRegistry::with_existing(plan.special_areas.iter().map(|a| a.id.as_str()));
        let id = ids.claim(draft.id.as_deref(), "area");

        let mut area = SpecialArea::new(id, draft.area_type.unwrap_or_default());
        if let Some(x) = finite(draft.x) {
            area.x = x;
        }
        if let Some(y) = finite(draft.y) {
            area.y = y;
        }
        if let Some(width) = finite(draft.width) {
            area.width = width;
        }
        if let Some(height) = finite(draft.height) {
            area.height = height;
        }

        debug!(
            area_id = %area.id,
            area_type = area.area_type.label(),
            "[AddSpecialArea] Area added"
        );

        let mut next = plan.clone();
        next.special_areas.push(area);
        Some(next)
    }
}
