//! Custom error types for snapkeep
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! A name that fails to parse against the retention naming convention is NOT
//! represented here; that is a recoverable condition handled inside the
//! retention engine (see `retention::identifier::ParseFailure`).

use thiserror::Error;

/// The main error type for snapkeep operations
#[derive(Error, Debug)]
pub enum SnapkeepError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// An external command failed or could not be spawned
    #[error("Command failed: {0}")]
    Command(String),

    /// Remote store errors (listing, upload, delete)
    #[error("Store error: {0}")]
    Store(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for SnapkeepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SnapkeepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for snapkeep operations
pub type SnapkeepResult<T> = Result<T, SnapkeepError>;
