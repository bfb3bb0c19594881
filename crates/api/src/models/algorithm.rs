//! Algorithm Explainer Models
//!
//! Request/response shapes for the `explain-algorithm` tool.

use ai_tools_core::{required_with_min, FieldErrors, StringOrStructured};
use serde::{Deserialize, Serialize};

/// Detail levels accepted by the explainer.
pub const COMPLEXITY_LEVELS: [&str; 3] = ["simple", "detailed", "advanced"];

/// Request for the algorithm explainer tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmExplainRequest {
    /// The algorithm to explain, e.g. `Binary Search`.
    pub algorithm_name: String,
    /// One of [`COMPLEXITY_LEVELS`].
    pub complexity: String,
}

impl AlgorithmExplainRequest {
    /// Creates a request with the default detail level.
    pub fn new(algorithm_name: impl Into<String>) -> Self {
        Self {
            algorithm_name: algorithm_name.into(),
            ..Self::default()
        }
    }

    /// Checks field requirements, keyed by form field name.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "algorithmName",
            &self.algorithm_name,
            2,
            "Algorithm name is required",
            "Algorithm name must be at least 2 characters",
        );
        errors.into_result()
    }

    /// The user-side transcript line recorded for this request.
    pub fn transcript_prompt(&self) -> String {
        format!(
            "Explain {} algorithm with {} complexity level",
            self.algorithm_name, self.complexity
        )
    }
}

impl Default for AlgorithmExplainRequest {
    fn default() -> Self {
        Self {
            algorithm_name: String::new(),
            complexity: "detailed".to_string(),
        }
    }
}

/// Response from the algorithm explainer tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlgorithmExplanation {
    /// Canonical algorithm name.
    pub name: String,
    /// One-paragraph summary.
    pub description: String,
    /// Step-by-step mechanics; arrives as prose or a structured outline.
    pub how_it_works: StringOrStructured,
    pub pseudocode: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub use_cases: Vec<String>,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
    /// Worked example, usually code.
    pub example: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let empty = AlgorithmExplainRequest::new("  ");
        assert_eq!(
            empty.validate().unwrap_err().get("algorithmName"),
            Some("Algorithm name is required")
        );

        let short = AlgorithmExplainRequest::new("A");
        assert_eq!(
            short.validate().unwrap_err().get("algorithmName"),
            Some("Algorithm name must be at least 2 characters")
        );

        assert!(AlgorithmExplainRequest::new("Quick Sort").validate().is_ok());
    }

    #[test]
    fn test_transcript_prompt() {
        let request = AlgorithmExplainRequest::new("Binary Search");
        assert_eq!(
            request.transcript_prompt(),
            "Explain Binary Search algorithm with detailed complexity level"
        );
    }

    #[test]
    fn test_how_it_works_accepts_both_shapes() {
        let prose: AlgorithmExplanation =
            serde_json::from_str(r#"{"name":"BFS","howItWorks":"visit neighbors level by level"}"#)
                .unwrap();
        assert_eq!(
            prose.how_it_works.display_text(),
            "visit neighbors level by level"
        );

        let outline: AlgorithmExplanation = serde_json::from_str(
            r#"{"name":"BFS","howItWorks":{"steps":["enqueue root","dequeue","visit"]}}"#,
        )
        .unwrap();
        assert!(matches!(
            outline.how_it_works,
            StringOrStructured::Structured(_)
        ));
    }
}
