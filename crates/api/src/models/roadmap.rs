//! Learning Roadmap Models
//!
//! Request/response shapes for the `generate-roadmap` tool. The backend is
//! loosest here: prose fields and list items arrive as strings or nested
//! objects interchangeably, so those use [`StringOrStructured`].

use ai_tools_core::{required_with_min, FieldErrors, StringOrStructured};
use serde::{Deserialize, Serialize};

/// Experience levels accepted by the roadmap generator.
pub const EXPERIENCE_LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];

/// Focus areas offered alongside the domain field.
pub const FOCUS_AREAS: [&str; 15] = [
    "Frontend Development",
    "Backend Development",
    "Full Stack Development",
    "Mobile Development",
    "Data Science",
    "Machine Learning",
    "DevOps",
    "Cloud Computing",
    "Cybersecurity",
    "Game Development",
    "Blockchain",
    "AI/ML",
    "UI/UX Design",
    "Database Management",
    "System Design",
];

/// Request for the roadmap generator tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    /// The field or technology to build a roadmap for.
    pub domain: String,
    /// One of [`EXPERIENCE_LEVELS`].
    pub experience_level: String,
    /// Selected entries from [`FOCUS_AREAS`].
    pub focus_areas: Vec<String>,
}

impl RoadmapRequest {
    /// Creates a request with the default experience level and no focus
    /// areas.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Checks field requirements, keyed by form field name.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required_with_min(
            &mut errors,
            "domain",
            &self.domain,
            2,
            "Domain is required",
            "Domain must be at least 2 characters",
        );
        errors.into_result()
    }

    /// The user-side transcript line recorded for this request.
    pub fn transcript_prompt(&self) -> String {
        format!(
            "Generate learning roadmap for {} ({} level)",
            self.domain, self.experience_level
        )
    }
}

impl Default for RoadmapRequest {
    fn default() -> Self {
        Self {
            domain: String::new(),
            experience_level: "beginner".to_string(),
            focus_areas: Vec::new(),
        }
    }
}

/// One phase of a generated roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapPhase {
    pub name: StringOrStructured,
    pub description: StringOrStructured,
    pub topics: Vec<StringOrStructured>,
    pub duration: String,
    pub resources: Vec<String>,
}

/// Response from the roadmap generator tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roadmap {
    /// The domain echoed back.
    pub domain: String,
    /// The experience level the roadmap targets.
    pub experience_level: String,
    /// Total estimated duration, free text.
    pub estimated_duration: String,
    /// Introductory summary.
    pub overview: StringOrStructured,
    pub prerequisites: Vec<String>,
    /// Ordered learning phases.
    pub phases: Vec<RoadmapPhase>,
    pub advanced_topics: Vec<String>,
    pub career_paths: Vec<String>,
    pub tips: Vec<String>,
    pub tools: Vec<StringOrStructured>,
    pub communities: Vec<String>,
}
