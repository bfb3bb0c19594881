//! Application Configuration
//!
//! Environment-variable configuration with fixed fallbacks. The health base
//! URL is not set directly: it derives from the API base URL by dropping
//! the `/ai-tools` segment, matching how the backend mounts its routes.

use std::time::Duration;

use ai_tools_api::ClientConfig;
use ai_tools_core::{CoreError, CoreResult};

/// Application display name.
pub const APP_NAME: &str = "AI Tools Studio";

/// Variable naming the backend tools base URL.
pub const ENV_API_BASE_URL: &str = "AI_TOOLS_API_BASE_URL";
/// Variable naming the runtime environment.
pub const ENV_ENVIRONMENT: &str = "AI_TOOLS_ENV";
/// Variable carrying the identity provider's publishable key.
pub const ENV_PUBLISHABLE_KEY: &str = "AI_TOOLS_AUTH_PUBLISHABLE_KEY";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api/ai-tools";
const DEFAULT_HEALTH_BASE_URL: &str = "http://localhost:5001/api";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Uniform request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Base URL of the tool endpoints.
    pub api_base_url: String,
    /// Base URL the health endpoint hangs off.
    pub health_base_url: String,
    /// Runtime environment name, e.g. `development`.
    pub environment: String,
    /// Identity provider publishable key, when configured.
    pub publishable_key: Option<String>,
    /// Uniform request timeout.
    pub timeout: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            health_base_url: DEFAULT_HEALTH_BASE_URL.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            publishable_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl StudioConfig {
    /// Loads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    ///
    /// Unset and empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(ENV_API_BASE_URL)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        // Derived from the raw variable, like the base URL itself: a custom
        // base without an `/ai-tools` segment doubles as the health base.
        let health_base_url = lookup(ENV_API_BASE_URL)
            .map(|value| value.replacen("/ai-tools", "", 1))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HEALTH_BASE_URL.to_string());

        let environment = lookup(ENV_ENVIRONMENT)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let publishable_key = lookup(ENV_PUBLISHABLE_KEY).filter(|value| !value.is_empty());

        Self {
            api_base_url,
            health_base_url,
            environment,
            publishable_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Full URL of one tool endpoint, e.g. `endpoint_url("/generate-code")`.
    pub fn endpoint_url(&self, suffix: &str) -> String {
        format!("{}{}", self.api_base_url, suffix)
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.health_base_url)
    }

    /// Whether the environment is `production`.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether the environment is `development`.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Application version, from the crate manifest.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Checks that both base URLs are present and HTTP-shaped.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, url) in [
            ("API base URL", &self.api_base_url),
            ("health base URL", &self.health_base_url),
        ] {
            if url.trim().is_empty() {
                return Err(CoreError::config(format!("{} is empty", name)));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CoreError::config(format!(
                    "{} must start with http:// or https://, got {}",
                    name, url
                )));
            }
        }
        Ok(())
    }

    /// The HTTP client configuration this config resolves to.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            health_url: self.health_base_url.clone(),
            timeout: self.timeout,
        }
    }
}
