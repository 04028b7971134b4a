//! Error types for plan data
//!
//! Plan operations themselves are total. These errors only surface from the
//! text-level edges: parsing a chair key or reading/writing JSON text.

use thiserror::Error;

/// Plan data errors
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid chair id: {0}")]
    InvalidChairId(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chair_id_message() {
        let err = PlanError::InvalidChairId("table".to_string());
        assert_eq!(err.to_string(), "Invalid chair id: table");
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PlanError = parse_err.into();
        assert!(matches!(err, PlanError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
