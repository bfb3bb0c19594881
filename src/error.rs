//! Application Errors
//!
//! Top-level error type for the service layer. Variants carry user-facing
//! text: rendering `to_string()` yields exactly what the dashboard shows
//! for that failure.

use ai_tools_api::ApiError;
use ai_tools_core::{CoreError, FieldErrors};
use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Top-level application error.
#[derive(Error, Debug)]
pub enum AppError {
    /// A request failed local validation; no network call was made.
    #[error("{0}")]
    Validation(FieldErrors),

    /// A backend call failed; the message is already user-facing.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A configuration or internal error.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// An operation required a token the provider could not supply.
    #[error("{0}")]
    Auth(String),
}

impl AppError {
    /// The fixed message for a missing authentication token.
    pub fn token_unavailable() -> Self {
        AppError::Auth("Authentication token not available".to_string())
    }

    /// The per-field validation messages, when this is a validation error.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
