//! DeleteArea applier

use crate::plan::traits::PlanApplier;
use shared::plan::Plan;
use tracing::debug;

/// DeleteArea applier
pub struct DeleteAreaApplier {
    pub area_id: String,
}

impl PlanApplier for DeleteAreaApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let index = plan.area_position(&self.area_id)?;
        let mut next = plan.clone();
        next.special_areas.remove(index);
        debug!(area_id = %self.area_id, "[DeleteArea] Area removed");
        Some(next)
    }
}
