//! RotateTable applier

use crate::plan::traits::PlanApplier;
use shared::models::Table;
use shared::plan::Plan;
use tracing::debug;

/// RotateTable applier
///
/// Rotation is folded into `[0, 360)`; rotating to the current angle
/// (for example 0 -> 360) is a no-op.
pub struct RotateTableApplier {
    pub table_id: String,
    pub rotation: i64,
}

impl PlanApplier for RotateTableApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let index = plan.table_position(&self.table_id)?;
        let rotation = Table::normalize_rotation(self.rotation);
        if plan.tables[index].rotation == rotation {
            return None;
        }

        let mut next = plan.clone();
        next.tables[index].rotation = rotation;
        debug!(table_id = %self.table_id, rotation, "[RotateTable] Table rotated");
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::fixtures::sample_plan;

    fn rotate(rotation: i64) -> RotateTableApplier {
        RotateTableApplier {
            table_id: "t1".to_string(),
            rotation,
        }
    }

    #[test]
    fn test_rotation_is_normalized() {
        let next = rotate(450).apply(&sample_plan()).unwrap();
        assert_eq!(next.tables[0].rotation, 90);

        let next = rotate(-45).apply(&sample_plan()).unwrap();
        assert_eq!(next.tables[0].rotation, 315);
    }

    #[test]
    fn test_equivalent_rotation_is_noop() {
        assert!(rotate(360).apply(&sample_plan()).is_none());
        assert!(rotate(0).apply(&sample_plan()).is_none());
    }

    #[test]
    fn test_missing_table_is_noop() {
        let applier = RotateTableApplier {
            table_id: "t9".to_string(),
            rotation: 90,
        };
        assert!(applier.apply(&sample_plan()).is_none());
    }
}
