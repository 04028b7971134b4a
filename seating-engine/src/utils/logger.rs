//! Logging Infrastructure
//!
//! Structured logging setup for hosts embedding the engine. The library
//! itself only emits `tracing` events and never installs a subscriber.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::core::EngineConfig;

/// Initialize the logger at `info` on stdout
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger from an [`EngineConfig`]
pub fn init_logger_with_config(config: &EngineConfig) {
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
}

/// Initialize the logger with optional JSON formatting and file output
///
/// `log_level` accepts a plain level (`debug`) or a full filter directive
/// (`seating_engine=trace,info`). `json` switches to one JSON object per
/// event. Logs go to a daily rolling file when `log_dir` exists, otherwise
/// to stdout. Calling this more than once is harmless; only the first
/// subscriber is installed.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_new(log_level.unwrap_or("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|path| path.is_dir())
        .map(|path| tracing_appender::rolling::daily(path, "seating-engine"));

    let _ = match (json.unwrap_or(false), file_appender) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(writer)) => subscriber.with_writer(writer).with_ansi(false).try_init(),
        (false, None) => subscriber.try_init(),
    };
}
