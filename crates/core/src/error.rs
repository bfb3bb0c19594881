//! Core Error Types
//!
//! Defines the foundational error types shared across the AI Tools Studio
//! workspace. These are dependency-free (only thiserror + std) so the core
//! crate stays lightweight.
//!
//! The API and application crates define their own richer error enums
//! (network categories, per-operation fallback messages) on top of these.

use thiserror::Error;

/// Core error type for the AI Tools Studio workspace.
///
/// This is the minimal error set the core crate needs; the application
/// crate aggregates it together with the API client errors.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::config("empty base URL");
        assert_eq!(err.to_string(), "Configuration error: empty base URL");
    }

    #[test]
    fn test_error_conversion() {
        let err = CoreError::config("empty base URL");
        let msg: String = err.into();
        assert!(msg.contains("Configuration error"));
    }

    #[test]
    fn test_validation_error() {
        let err = CoreError::validation("description is required");
        assert_eq!(err.to_string(), "Validation error: description is required");
    }

    #[test]
    fn test_internal_error() {
        let err = CoreError::internal("watch channel closed");
        assert_eq!(err.to_string(), "Internal error: watch channel closed");
    }
}
