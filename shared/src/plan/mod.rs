//! Seating plan aggregate and the actions that transform it
//!
//! - Actions: requests from the host to change the plan
//! - Plan: the immutable aggregate every action produces a new value of

pub mod action;
pub mod snapshot;

// Re-exports
pub use action::{AreaDraft, ItemKind, PlanAction, TableDraft, TableUpdate};
pub use snapshot::Plan;
