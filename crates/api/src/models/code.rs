//! Code Generator Models
//!
//! Request/response shapes for the `generate-code` tool.

use ai_tools_core::{required_with_min, FieldErrors};
use serde::{Deserialize, Serialize};

/// Language identifiers the backend accepts, shared with the complexity
/// analyzer.
pub const LANGUAGES: [&str; 10] = [
    "javascript",
    "python",
    "java",
    "cpp",
    "csharp",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
];

/// Request for the code generator tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeGenRequest {
    /// What the generated code should do.
    pub problem_statement: String,
    /// Target language identifier (see [`LANGUAGES`]).
    pub language: String,
}

impl CodeGenRequest {
    /// Creates a request with the default language.
    pub fn new(problem_statement: impl Into<String>) -> Self {
        Self {
            problem_statement: problem_statement.into(),
            ..Self::default()
        }
    }

    /// Checks field requirements, keyed by form field name.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "problemStatement",
            &self.problem_statement,
            10,
            "Problem statement is required",
            "Problem statement must be at least 10 characters",
        );
        errors.into_result()
    }

    /// The user-side transcript line recorded for this request.
    pub fn transcript_prompt(&self) -> String {
        format!(
            "Generate {} code for: {}",
            self.language, self.problem_statement
        )
    }
}

impl Default for CodeGenRequest {
    fn default() -> Self {
        Self {
            problem_statement: String::new(),
            language: "javascript".to_string(),
        }
    }
}

/// Response from the code generator tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedCode {
    /// The generated source code.
    pub code: String,
    /// Language the code was generated in.
    pub language: String,
    /// The problem statement echoed back.
    pub problem_statement: String,
}
