//! Error type for the outer surface of the engine.
//!
//! The mapping and scoring functions themselves never fail: an entity that
//! cannot be resolved simply has no effect. Errors only come from parsing
//! enum strings, manual edits, suggestion bookkeeping and the batch driver.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Value {value} out of range for {field} (expected 1-9)")]
    OutOfRange { field: String, value: i64 },

    #[error("Suggestion not found: {0}")]
    SuggestionNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Usage: {0}")]
    Usage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field() {
        let err = EngineError::OutOfRange {
            field: "smoking".into(),
            value: 12,
        };
        assert_eq!(
            err.to_string(),
            "Value 12 out of range for smoking (expected 1-9)"
        );
    }

    #[test]
    fn json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
