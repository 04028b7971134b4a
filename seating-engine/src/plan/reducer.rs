//! Plan reducer
//!
//! `reduce` is the single entry point for turning an action into the next
//! plan. It is pure: no I/O, no clock, no shared state. When an action has
//! no effect the input `Arc` itself is returned, so callers detect no-ops
//! with `Arc::ptr_eq`.

use std::sync::Arc;

use super::appliers::ApplierAction;
use super::traits::PlanApplier;
use shared::plan::{Plan, PlanAction};
use tracing::debug;

/// Apply `action` to `plan`, returning the next plan.
///
/// Unknown actions and actions that would change nothing return a clone of
/// the same `Arc`. A plan that already breaks an invariant (one built by
/// hand rather than through `normalize_plan`) is reduced as-is; debug
/// builds only check that a valid plan stays valid.
pub fn reduce(plan: &Arc<Plan>, action: &PlanAction) -> Arc<Plan> {
    let Some(applier) = ApplierAction::from_action(action) else {
        debug!(action = action.kind(), "Ignoring unknown plan action");
        return Arc::clone(plan);
    };

    match applier.apply(plan) {
        Some(next) => {
            debug_assert!(
                super::verify(plan).is_err() || super::verify(&next).is_ok(),
                "{} broke a plan invariant: {:?}",
                action.kind(),
                super::verify(&next)
            );
            Arc::new(next)
        }
        None => {
            debug!(action = action.kind(), "Plan action had no effect");
            Arc::clone(plan)
        }
    }
}
