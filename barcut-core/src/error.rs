//! Error types for cut planning.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for cut planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Invalid configuration (E100)
    InvalidConfiguration = 100,
    /// Cut longer than the stock bar (E200)
    CutTooLong = 200,
    /// Output serialization failed (E300)
    SerializationFailed = 300,
}

/// Main error type for cut planning.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid numeric value at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Invalid configuration for '{field}': expected {expected}, got '{value}'")]
    Configuration {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Cut of {length} mm for material '{material}' exceeds bar length {bar_length} mm")]
    CutTooLong {
        length: f64,
        material: String,
        bar_length: f64,
    },

    #[error("Unknown algorithm '{name}' (expected FFD, BFD or Heuristic)")]
    UnknownAlgorithm { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Build a configuration error for a rejected field value.
    pub fn configuration(
        field: impl Into<String>,
        expected: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        PlanError::Configuration {
            field: field.into(),
            expected: expected.into(),
            value: value.to_string(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PlanError::ParseError { .. } => ErrorCode::ParseError,
            PlanError::InvalidNumber { .. } => ErrorCode::ParseError,
            PlanError::Configuration { .. } => ErrorCode::InvalidConfiguration,
            PlanError::CutTooLong { .. } => ErrorCode::CutTooLong,
            PlanError::UnknownAlgorithm { .. } => ErrorCode::InvalidConfiguration,
            PlanError::Io(_) => ErrorCode::FileNotFound,
            PlanError::Json(_) => ErrorCode::SerializationFailed,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_too_long_message_names_length_and_material() {
        let err = PlanError::CutTooLong {
            length: 3200.0,
            material: "ST37".to_string(),
            bar_length: 3000.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("3200"));
        assert!(msg.contains("ST37"));
        assert_eq!(err.code(), ErrorCode::CutTooLong);
        assert_eq!(err.code_value(), 200);
    }

    #[test]
    fn test_configuration_helper() {
        let err = PlanError::configuration("kerf", "a value >= 0", -1.5);
        match &err {
            PlanError::Configuration {
                field,
                expected,
                value,
            } => {
                assert_eq!(field, "kerf");
                assert_eq!(expected, "a value >= 0");
                assert_eq!(value, "-1.5");
            }
            _ => panic!("Expected Configuration error"),
        }
        assert_eq!(err.code_value(), 100);
    }

    #[test]
    fn test_parse_errors_share_code() {
        let a = PlanError::ParseError {
            line: 3,
            message: "bad".into(),
        };
        let b = PlanError::InvalidNumber {
            line: 4,
            value: "x".into(),
        };
        assert_eq!(a.code(), b.code());
        assert_eq!(a.code_value(), -3);
    }
}
