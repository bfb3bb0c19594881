//! Frontend Scaffold Models
//!
//! Request/response shapes for the `generate-frontend` tool. The response's
//! `implementation` field holds the raw blob the splitter carves into
//! display files.

use ai_tools_core::{required_with_min, FieldErrors};
use serde::{Deserialize, Serialize};

/// Framework identifiers the scaffold tool accepts.
pub const FRONTEND_FRAMEWORKS: [&str; 4] = ["html-css-js", "react", "angular", "vue"];

/// Styling themes offered with the description.
pub const STYLING_THEMES: [&str; 6] = [
    "modern",
    "minimal",
    "colorful",
    "dark",
    "glassmorphism",
    "neomorphic",
];

/// Request for the frontend scaffold tool.
///
/// `features` is free text here, unlike the API designer's feature list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendRequest {
    /// What to build.
    pub description: String,
    /// One of [`FRONTEND_FRAMEWORKS`].
    pub framework: String,
    /// Free-text feature wishes.
    pub features: String,
    /// One of [`STYLING_THEMES`].
    pub styling: String,
}

impl FrontendRequest {
    /// Creates a request with the default framework and styling.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Checks field requirements, keyed by form field name.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "description",
            &self.description,
            10,
            "Description is required",
            "Description must be at least 10 characters",
        );
        errors.into_result()
    }

    /// The user-side transcript line recorded for this request.
    pub fn transcript_prompt(&self) -> String {
        format!(
            "Generate frontend code for: {} using {}",
            self.description, self.framework
        )
    }
}

impl Default for FrontendRequest {
    fn default() -> Self {
        Self {
            description: String::new(),
            framework: "html-css-js".to_string(),
            features: String::new(),
            styling: "modern".to_string(),
        }
    }
}

/// Response from the frontend scaffold tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrontendCode {
    /// The description echoed back.
    pub description: String,
    /// Framework the code targets.
    pub framework: String,
    /// Features echoed back.
    pub features: String,
    /// Styling theme echoed back.
    pub styling: String,
    /// The generated code, one combined blob.
    pub implementation: String,
    /// Backend-side generation timestamp, free form.
    pub timestamp: String,
}
