//! API Error Mapping
//!
//! Maps transport failures and non-success HTTP responses onto the exact
//! messages the dashboard shows. Tool endpoints and chat endpoints disagree
//! on the shape of their error bodies (`message` vs `error` field) and on
//! whether 503 gets special treatment, so each has its own mapper.

use thiserror::Error;

/// Errors surfaced by backend tool and chat calls.
///
/// The `Display` string of every variant is the user-facing message;
/// callers render `to_string()` directly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request exceeded the configured timeout.
    #[error("Request timeout. Please try again.")]
    Timeout,

    /// A tool endpoint returned HTTP 503 without its own message.
    #[error("Service temporarily unavailable. Please try again later.")]
    Unavailable,

    /// The backend supplied its own message in the error body; shown verbatim.
    #[error("{0}")]
    Backend(String),

    /// Transport failure or unclassified error status, shown as the
    /// operation's fallback message. `detail` keeps the cause for logs.
    #[error("{message}")]
    Failed {
        message: String,
        detail: Option<String>,
    },

    /// A success status carried a body that could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Creates a `Failed` error with an underlying cause attached.
    pub fn failed(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// Maps a transport-level failure: timeouts get the fixed timeout
    /// message, everything else shows `fallback`.
    pub fn from_transport(err: reqwest::Error, fallback: &str) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::failed(fallback, err.to_string())
        }
    }

    /// Maps a non-success tool response.
    ///
    /// Precedence: a backend-provided `message` field wins, then 503 maps
    /// to [`ApiError::Unavailable`], then `fallback`.
    pub fn from_tool_status(status: u16, body: &str, fallback: &str) -> Self {
        if let Some(message) = extract_field(body, "message") {
            return ApiError::Backend(message);
        }
        if status == 503 {
            return ApiError::Unavailable;
        }
        ApiError::failed(fallback, format!("HTTP {status}: {body}"))
    }

    /// Maps a non-success chat response.
    ///
    /// Chat endpoints put their message under `error` and have no 503
    /// special case.
    pub fn from_chat_status(status: u16, body: &str, fallback: &str) -> Self {
        if let Some(message) = extract_field(body, "error") {
            return ApiError::Backend(message);
        }
        ApiError::failed(fallback, format!("HTTP {status}: {body}"))
    }

    /// The underlying cause when one was captured, for logging.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Failed { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse(format!("JSON parse error: {}", err))
    }
}

/// Pulls a non-empty string field out of a JSON error body.
///
/// Non-JSON bodies, missing fields, empty strings, and non-string values
/// all yield `None` so the caller falls through to its next rule.
fn extract_field(body: &str, field: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get(field) {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
