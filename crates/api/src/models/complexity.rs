//! Complexity Analysis Models
//!
//! Request/response shapes for the `analyze-complexity` tool. The language
//! catalog is shared with the code generator ([`super::code::LANGUAGES`]).

use ai_tools_core::{required_with_min, FieldErrors};
use serde::{Deserialize, Serialize};

/// Request for the complexity analyzer tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityRequest {
    /// The source code to analyze.
    pub code: String,
    /// Language identifier (see [`super::code::LANGUAGES`]).
    pub language: String,
}

impl ComplexityRequest {
    /// Creates a request with the default language.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Checks field requirements, keyed by form field name.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "code",
            &self.code,
            10,
            "Code is required",
            "Code must be at least 10 characters",
        );
        errors.into_result()
    }

    /// The user-side transcript line: the first 100 characters of the code
    /// with a trailing ellipsis.
    pub fn transcript_prompt(&self) -> String {
        let snippet: String = self.code.chars().take(100).collect();
        format!(
            "Analyze time complexity for {} code: {}...",
            self.language, snippet
        )
    }
}

impl Default for ComplexityRequest {
    fn default() -> Self {
        Self {
            code: String::new(),
            language: "javascript".to_string(),
        }
    }
}

/// Best-/average-/worst-case time analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeComplexityDetail {
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
    pub detailed_analysis: String,
    pub factors: Vec<String>,
    pub examples: Vec<String>,
}

/// Auxiliary and total space analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpaceComplexityDetail {
    pub auxiliary: String,
    pub total: String,
    pub detailed_analysis: String,
    pub factors: Vec<String>,
    pub memory_usage: String,
}

/// Classification of the analyzed algorithm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlgorithmAnalysis {
    pub algorithm_type: String,
    pub efficiency: String,
    pub optimization_opportunities: Vec<String>,
    pub tradeoffs: Vec<String>,
    pub comparison: String,
}

/// Per-line cost attribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeBreakdownEntry {
    pub line: String,
    pub operation: String,
    pub complexity: String,
    pub explanation: String,
}

/// A concrete optimization with its cost/benefit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationSuggestion {
    pub suggestion: String,
    pub impact: String,
    pub implementation: String,
    pub tradeoff: String,
}

/// Practical consequences of the measured complexity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealWorldImplications {
    pub scalability: String,
    pub performance: String,
    pub use_cases: Vec<String>,
    pub limitations: Vec<String>,
}

/// Text-art charts produced by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplexityVisualization {
    pub complexity_graph: String,
    pub comparison_chart: String,
}

/// Response from the complexity analyzer tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplexityAnalysis {
    pub overview: String,
    pub time_complexity: TimeComplexityDetail,
    pub space_complexity: SpaceComplexityDetail,
    pub algorithm_analysis: AlgorithmAnalysis,
    pub code_breakdown: Vec<CodeBreakdownEntry>,
    pub optimization_suggestions: Vec<OptimizationSuggestion>,
    pub real_world_implications: RealWorldImplications,
    pub visualization: ComplexityVisualization,
}
