//! Error types for the projection engine

use thiserror::Error;

/// Errors raised by mortgage math, validation and the projection engine
///
/// Every variant is a caller/input error: nothing here is transient, so
/// there is no retry path. The calculation stops at the first failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ProjectionError::InvalidInput { field, .. } => field,
        }
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while building the country reference table
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Failed to read country data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid country row {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),
}

/// Errors raised while loading an analysis request from JSON
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request JSON: {0}")]
    Json(#[from] serde_json::Error),
}
