//! Plan data models
//!
//! Guests and tables reference each other only by id: a table seat holds a
//! guest id, never the guest itself.

pub mod chair;
pub mod guest;
pub mod special_area;
pub mod table;

// Re-exports
pub use chair::*;
pub use guest::*;
pub use special_area::*;
pub use table::*;
