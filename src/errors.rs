use std::result::Result as StdResult;

use thiserror::Error;

/// Rejections produced while validating raw input at the entry boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Unknown {kind}: `{value}`{}", suggestion_hint(.suggestion))]
    UnknownEnumValue {
        kind: &'static str,
        value: String,
        suggestion: Option<String>,
    },
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{0} is too large to produce a finite estimate")]
    NotFinite(&'static str),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(label) => format!(" (did you mean `{label}`?)"),
        None => String::new(),
    }
}

impl ValidationError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        ValidationError::UnknownEnumValue {
            kind,
            value: value.into(),
            suggestion: None,
        }
    }
}

/// Unified error type for the domain, session and export layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Profile incomplete: complete the profile before recording travel")]
    ProfileIncomplete,
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}
