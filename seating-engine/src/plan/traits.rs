//! Applier trait shared by every plan action

use enum_dispatch::enum_dispatch;
use shared::plan::Plan;

/// Applies one action kind to a plan.
///
/// Appliers are PURE: they read the current plan and return the next one,
/// or `None` when the action has no effect (unknown target, locked chair,
/// unchanged values). They never mutate the input.
#[enum_dispatch]
pub trait PlanApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan>;
}
