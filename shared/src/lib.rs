//! Shared types for the seating planner
//!
//! Plain serializable data used by the engine and by hosts that persist or
//! draw a plan: guests, tables, special areas, locked chairs and the actions
//! that transform them. Behaviour lives in `seating-engine`.

pub mod error;
pub mod models;
pub mod plan;
pub mod util;

// Re-exports
pub use error::{PlanError, PlanResult};
pub use models::{ChairId, Guest, GuestImport, SpecialArea, SpecialAreaType, Table, TableShape};
pub use plan::{AreaDraft, ItemKind, Plan, PlanAction, TableDraft, TableUpdate};
pub use serde::{Deserialize, Serialize};
