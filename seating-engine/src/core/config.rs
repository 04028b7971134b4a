use crate::history::DEFAULT_HISTORY_LIMIT;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | SEATING_HISTORY_LIMIT | 50 | Undo depth |
/// | SEATING_LOG_LEVEL | info | Level handed to the logger |
/// | SEATING_LOG_JSON | false | Emit one JSON object per event (`true`/`1`) |
/// | SEATING_LOG_DIR | (unset) | Directory for daily rolling log files |
///
/// # Example
///
/// ```ignore
/// SEATING_HISTORY_LIMIT=200 SEATING_LOG_LEVEL=debug my-host
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of undo snapshots kept
    pub history_limit: usize,
    /// trace | debug | info | warn | error
    pub log_level: String,
    /// JSON output instead of the human-readable format
    pub log_json: bool,
    /// Log to daily rolling files in this directory instead of stdout
    pub log_dir: Option<String>,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            history_limit: lookup("SEATING_HISTORY_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_HISTORY_LIMIT),
            log_level: lookup("SEATING_LOG_LEVEL")
                .map(|v| v.trim().to_ascii_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "info".into()),
            log_json: lookup("SEATING_LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),
            log_dir: lookup("SEATING_LOG_DIR").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Override the undo depth
    ///
    /// Mostly used by tests
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
