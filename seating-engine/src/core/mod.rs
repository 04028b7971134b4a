//! Core module - engine configuration
//!
//! - [`EngineConfig`] - history depth and logging settings

pub mod config;

pub use config::EngineConfig;
