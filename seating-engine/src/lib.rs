//! Seating Engine - wedding/event seating plan core
//!
//! # Architecture
//!
//! Pure, synchronous state engine for a seating plan editor:
//!
//! - **Layout** (`layout`): chair positions around circle, square,
//!   rectangle and imperial tables
//! - **Plan** (`plan`): the reducer, one applier per action kind, the
//!   normalizer for stored data, and invariant maintenance
//! - **History** (`history`): bounded undo/redo over `Arc<Plan>` snapshots
//! - **Manager** (`manager`): the facade a host UI drives
//!
//! Data types (`Plan`, `Table`, `PlanAction`, ...) live in the `shared` crate.
//!
//! # Module layout
//!
//! ```text
//! seating-engine/src/
//! ├── core/          # EngineConfig
//! ├── layout/        # seat geometry per table shape
//! ├── plan/          # reducer, appliers, normalizer, invariants
//! ├── history.rs     # undo/redo stacks
//! ├── manager/       # PlanManager facade
//! └── utils/         # logger setup
//! ```

pub mod core;
pub mod history;
pub mod layout;
pub mod manager;
pub mod plan;
pub mod utils;

// Re-export public types
pub use crate::core::EngineConfig;
pub use history::{DEFAULT_HISTORY_LIMIT, PlanHistory};
pub use layout::{SeatPlacement, TableGeometry, seat_layout, table_layout};
pub use manager::PlanManager;
pub use plan::{InvariantViolation, normalize_plan, reduce, verify};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_config, init_logger_with_file};
