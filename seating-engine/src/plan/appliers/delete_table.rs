//! DeleteTable applier
//!
//! Removes a table. Its occupants become unseated and its locks are
//! dropped along with it.

use crate::plan::invariants::{prune_locked_chairs, sync_seated_flags};
use crate::plan::traits::PlanApplier;
use shared::plan::Plan;
use tracing::debug;

/// DeleteTable applier
pub struct DeleteTableApplier {
    pub table_id: String,
}

impl PlanApplier for DeleteTableApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let index = plan.table_position(&self.table_id)?;

        let mut next = plan.clone();
        let removed = next.tables.remove(index);
        sync_seated_flags(&mut next.guests, &next.tables);
        let pruned = prune_locked_chairs(&mut next.locked_chairs, &next.tables);

        debug!(
            table_id = %removed.id,
            unseated = removed.occupants().count(),
            pruned_locks = pruned,
            "[DeleteTable] Table removed"
        );
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::fixtures::{sample_plan, seated};
    use crate::plan::invariants::verify;
    use shared::models::ChairId;

    fn delete(table_id: &str) -> DeleteTableApplier {
        DeleteTableApplier {
            table_id: table_id.to_string(),
        }
    }

    #[test]
    fn test_delete_unseats_guests_and_prunes_locks() {
        let plan = seated(sample_plan(), "t1", 0, "g1");
        let mut plan = seated(plan, "t2", 1, "g2");
        plan.locked_chairs.insert(ChairId::new("t1", 2));
        plan.locked_chairs.insert(ChairId::new("t2", 0));

        let next = delete("t1").apply(&plan).unwrap();

        assert_eq!(next.tables.len(), 1);
        assert!(!next.guest("g1").unwrap().seated);
        assert!(next.guest("g2").unwrap().seated);
        assert_eq!(
            next.locked_chairs.iter().cloned().collect::<Vec<_>>(),
            vec![ChairId::new("t2", 0)]
        );
        assert!(verify(&next).is_ok());
    }

    #[test]
    fn test_delete_missing_table_is_noop() {
        assert!(delete("t9").apply(&sample_plan()).is_none());
    }
}
