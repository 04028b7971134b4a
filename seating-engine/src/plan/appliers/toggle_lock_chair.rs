//! ToggleLockChair applier
//!
//! Flips the lock on one chair. A locked chair keeps its occupant (or
//! its emptiness) until unlocked.

use crate::plan::traits::PlanApplier;
use shared::models::ChairId;
use shared::plan::Plan;
use tracing::debug;

/// ToggleLockChair applier
pub struct ToggleLockChairApplier {
    pub table_id: String,
    pub seat_index: u32,
}

impl PlanApplier for ToggleLockChairApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let table = plan.table(&self.table_id)?;
        if !table.has_seat(self.seat_index) {
            return None;
        }

        let chair = ChairId::new(self.table_id.clone(), self.seat_index);
        let mut next = plan.clone();
        let locked = if next.locked_chairs.remove(&chair) {
            false
        } else {
            next.locked_chairs.insert(chair.clone());
            true
        };

        debug!(chair = %chair, locked, "[ToggleLockChair] Lock toggled");
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::fixtures::sample_plan;

    fn toggle(table_id: &str, seat_index: u32) -> ToggleLockChairApplier {
        ToggleLockChairApplier {
            table_id: table_id.to_string(),
            seat_index,
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let plan = sample_plan();
        let locked = toggle("t2", 3).apply(&plan).unwrap();
        assert!(locked.is_locked(&ChairId::new("t2", 3)));

        let unlocked = toggle("t2", 3).apply(&locked).unwrap();
        assert!(unlocked.locked_chairs.is_empty());
        assert_eq!(unlocked, plan);
    }

    #[test]
    fn test_missing_table_is_noop() {
        assert!(toggle("t9", 0).apply(&sample_plan()).is_none());
    }

    #[test]
    fn test_out_of_range_seat_is_noop() {
        // t1 has 4 seats
        assert!(toggle("t1", 4).apply(&sample_plan()).is_none());
    }
}
