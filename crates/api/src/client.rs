//! AI Tools Client
//!
//! HTTP client for the backend's six tool endpoints plus the service
//! health probe. Every tool call POSTs a camelCase JSON request, expects a
//! `{"data": ...}` envelope back, and maps failures through the shared
//! rules in [`crate::error`] with its own fallback message.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    AlgorithmExplainRequest, AlgorithmExplanation, ApiRequest, CodeGenRequest, ComplexityAnalysis,
    ComplexityRequest, FrontendCode, FrontendRequest, GeneratedApi, GeneratedCode, Roadmap,
    RoadmapRequest, ToolEnvelope,
};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the tools client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the tool endpoints, e.g.
    /// `http://localhost:5001/api/ai-tools`.
    pub base_url: String,
    /// Base URL the health probe hangs off, e.g.
    /// `http://localhost:5001/api`.
    pub health_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001/api/ai-tools".to_string(),
            health_url: "http://localhost:5001/api".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for the AI tool endpoints.
pub struct AiToolsClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl AiToolsClient {
    /// Creates a client with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::failed("Failed to create HTTP client", e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Creates a client wrapping an existing `reqwest::Client`.
    ///
    /// Useful for testing or when the caller wants to control proxy/TLS
    /// settings.
    pub fn with_reqwest_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Calls `POST {base}/generate-code`.
    pub async fn generate_code(&self, request: &CodeGenRequest) -> Result<GeneratedCode, ApiError> {
        self.post_tool("/generate-code", request, "Failed to generate code")
            .await
    }

    /// Calls `POST {base}/generate-roadmap`.
    pub async fn generate_roadmap(&self, request: &RoadmapRequest) -> Result<Roadmap, ApiError> {
        self.post_tool("/generate-roadmap", request, "Roadmap generation failed")
            .await
    }

    /// Calls `POST {base}/analyze-complexity`.
    pub async fn analyze_complexity(
        &self,
        request: &ComplexityRequest,
    ) -> Result<ComplexityAnalysis, ApiError> {
        self.post_tool("/analyze-complexity", request, "Failed to analyze complexity")
            .await
    }

    /// Calls `POST {base}/explain-algorithm`.
    pub async fn explain_algorithm(
        &self,
        request: &AlgorithmExplainRequest,
    ) -> Result<AlgorithmExplanation, ApiError> {
        self.post_tool("/explain-algorithm", request, "Failed to explain algorithm")
            .await
    }

    /// Calls `POST {base}/generate-frontend`.
    pub async fn generate_frontend(
        &self,
        request: &FrontendRequest,
    ) -> Result<FrontendCode, ApiError> {
        self.post_tool("/generate-frontend", request, "Failed to generate frontend code")
            .await
    }

    /// Calls `POST {base}/generate-api`.
    pub async fn generate_api(&self, request: &ApiRequest) -> Result<GeneratedApi, ApiError> {
        self.post_tool("/generate-api", request, "Failed to generate API")
            .await
    }

    /// Probes `GET {health}/health`.
    ///
    /// Any 2xx counts as reachable. Every kind of failure, timeouts
    /// included, collapses to the one fixed unavailability message.
    pub async fn health_check(&self) -> Result<(), ApiError> {
        let url = format!("{}/health", self.config.health_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(ApiError::failed(
                "Backend service is not available",
                format!("HTTP {}", response.status().as_u16()),
            )),
            Err(err) => Err(ApiError::failed(
                "Backend service is not available",
                err.to_string(),
            )),
        }
    }

    /// Shared tool POST: send, map the status, unwrap the envelope.
    async fn post_tool<Req, Resp>(
        &self,
        path: &str,
        request: &Req,
        fallback: &str,
    ) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, fallback))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_tool_status(status.as_u16(), &body, fallback));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(e, fallback))?;
        let envelope: ToolEnvelope<Resp> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}
