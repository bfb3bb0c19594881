//! API Designer Models
//!
//! Request/response shapes for the `generate-api` tool. The response is the
//! deepest of the six tools; identifier-ish fields that the backend has
//! been seen returning as objects use [`StringOrStructured`].

use ai_tools_core::{required_with_min, FieldErrors, StringOrStructured};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend framework identifiers the designer accepts.
pub const API_FRAMEWORKS: [&str; 8] = [
    "express", "fastapi", "spring", "django", "flask", "laravel", "rails", "gin",
];

/// Authentication schemes offered with the description.
pub const AUTH_METHODS: [&str; 5] = ["jwt", "session", "oauth", "api-key", "none"];

/// Database identifiers offered with the description.
pub const DATABASES: [&str; 6] = [
    "mongodb",
    "postgresql",
    "mysql",
    "sqlite",
    "redis",
    "firebase",
];

/// Feature checkboxes offered with the description.
pub const API_FEATURES: [&str; 16] = [
    "User Authentication",
    "File Upload",
    "Email Notifications",
    "Real-time Updates",
    "Data Validation",
    "Rate Limiting",
    "Caching",
    "Logging",
    "Error Handling",
    "API Documentation",
    "Testing Suite",
    "Database Migrations",
    "Search Functionality",
    "Pagination",
    "Filtering",
    "Sorting",
];

/// Request for the API designer tool.
///
/// `features` is a selected-entries list here, unlike the frontend
/// scaffold's free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// What the API should do.
    pub description: String,
    /// One of [`API_FRAMEWORKS`].
    pub framework: String,
    /// Selected entries from [`API_FEATURES`].
    pub features: Vec<String>,
    /// One of [`AUTH_METHODS`].
    pub authentication: String,
    /// One of [`DATABASES`].
    pub database: String,
}

impl ApiRequest {
    /// Creates a request with the default framework, auth, and database.
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
            "API description is required",
            "API description must be at least 10 characters",
        );
        errors.into_result()
    }

    /// The user-side transcript line recorded for this request.
    pub fn transcript_prompt(&self) -> String {
        format!(
            "Generate {} API for: {}",
            self.framework, self.description
        )
    }
}

impl Default for ApiRequest {
    fn default() -> Self {
        Self {
            description: String::new(),
            framework: "express".to_string(),
            features: Vec::new(),
            authentication: "jwt".to_string(),
            database: "mongodb".to_string(),
        }
    }
}

/// One parameter of a designed endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiParameter {
    pub name: StringOrStructured,
    #[serde(rename = "type")]
    pub param_type: StringOrStructured,
    pub required: bool,
    pub description: String,
}

/// Sample response of a designed endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointResponse {
    /// HTTP status, when the backend supplies one.
    pub status: Option<i64>,
    /// Sample payload, any JSON shape.
    pub data: Value,
    pub description: String,
}

/// One designed endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiEndpoint {
    /// HTTP method, e.g. `GET`.
    pub method: String,
    /// Route path, e.g. `/products/:id`.
    pub path: String,
    pub description: StringOrStructured,
    pub parameters: Vec<ApiParameter>,
    pub response: EndpointResponse,
}

/// One field of a designed data model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelField {
    pub name: StringOrStructured,
    #[serde(rename = "type")]
    pub field_type: StringOrStructured,
    pub required: bool,
    pub description: String,
}

/// One designed data model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiModel {
    pub name: StringOrStructured,
    pub fields: Vec<ModelField>,
}

/// Installation and configuration instructions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetupGuide {
    pub installation: Vec<String>,
    pub configuration: Vec<String>,
    pub environment: Vec<String>,
}

/// Generated source artifacts, one string per file kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeArtifacts {
    pub server: String,
    pub routes: String,
    pub models: String,
    pub middleware: String,
}

/// Suggested test examples and tooling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestingGuide {
    pub examples: Vec<String>,
    pub tools: Vec<String>,
}

/// Suggested deployment targets and steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentGuide {
    pub platforms: Vec<String>,
    pub steps: Vec<StringOrStructured>,
}

/// Response from the API designer tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedApi {
    /// Summary of the designed API.
    pub overview: StringOrStructured,
    pub endpoints: Vec<ApiEndpoint>,
    pub models: Vec<ApiModel>,
    pub setup: SetupGuide,
    pub code: CodeArtifacts,
    pub testing: TestingGuide,
    pub deployment: DeploymentGuide,
}
