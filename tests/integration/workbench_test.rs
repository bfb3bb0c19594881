//! Workbench Integration Tests
//!
//! Exercises the full tool flow from configuration through the HTTP
//! clients: local validation short-circuits, exact user-facing failure
//! messages when the backend is unreachable, and the token gate on chat
//! store access. Network tests point at a closed local port so failures
//! are immediate connection refusals rather than timeouts.

use std::sync::Arc;

use ai_tools_studio::{
    split_files, AlgorithmExplainRequest, ApiRequest, CodeGenRequest, ComplexityRequest,
    Framework, FrontendCode, FrontendRequest, RoadmapRequest, SignedOut, StaticToken,
    StudioConfig, TokenProvider, Workbench,
};

fn unreachable_config() -> StudioConfig {
    StudioConfig {
        api_base_url: "http://127.0.0.1:1/api/ai-tools".to_string(),
        health_base_url: "http://127.0.0.1:1/api".to_string(),
        ..StudioConfig::default()
    }
}

fn unreachable_workbench(identity: Arc<dyn TokenProvider>) -> Workbench {
    Workbench::from_config(&unreachable_config(), identity).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_workbench_from_default_config() {
    let workbench = Workbench::from_config(&StudioConfig::default(), Arc::new(SignedOut)).unwrap();
    assert_eq!(
        workbench.tools().config().base_url,
        "http://localhost:5001/api/ai-tools"
    );
    assert_eq!(
        workbench.tools().config().health_url,
        "http://localhost:5001/api"
    );
}

#[test]
fn test_from_config_rejects_malformed_base_url() {
    let config = StudioConfig {
        api_base_url: "localhost:5001/api/ai-tools".to_string(),
        ..StudioConfig::default()
    };
    let err = Workbench::from_config(&config, Arc::new(SignedOut)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: API base URL must start with http:// or https://, got localhost:5001/api/ai-tools"
    );
}

// ============================================================================
// Validation Short-Circuit Tests
// ============================================================================

#[tokio::test]
async fn test_code_generation_rejects_short_problem_statement() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .generate_code(&CodeGenRequest::new("fizzbuzz"))
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("validation error");
    assert_eq!(
        errors.get("problemStatement"),
        Some("Problem statement must be at least 10 characters")
    );
}

#[tokio::test]
async fn test_code_generation_rejects_empty_problem_statement() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .generate_code(&CodeGenRequest::new("   "))
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("validation error");
    assert_eq!(errors.get("problemStatement"), Some("Problem statement is required"));
}

#[tokio::test]
async fn test_roadmap_rejects_short_domain() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .generate_roadmap(&RoadmapRequest::new("x"))
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("validation error");
    assert_eq!(
        errors.get("domain"),
        Some("Domain must be at least 2 characters")
    );
}

#[tokio::test]
async fn test_complexity_rejects_short_code() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .analyze_complexity(&ComplexityRequest::new("x = 1"))
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("validation error");
    assert_eq!(errors.get("code"), Some("Code must be at least 10 characters"));
}

#[tokio::test]
async fn test_algorithm_rejects_short_name() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .explain_algorithm(&AlgorithmExplainRequest::new("q"))
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("validation error");
    assert_eq!(
        errors.get("algorithmName"),
        Some("Algorithm name must be at least 2 characters")
    );
}

#[tokio::test]
async fn test_frontend_rejects_short_description() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .generate_frontend(&FrontendRequest::new("a form"))
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("validation error");
    assert_eq!(
        errors.get("description"),
        Some("Description must be at least 10 characters")
    );
}

#[tokio::test]
async fn test_api_rejects_short_description() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .generate_api(&ApiRequest::new("a store"))
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("validation error");
    assert_eq!(
        errors.get("description"),
        Some("API description must be at least 10 characters")
    );
}

#[tokio::test]
async fn test_validation_error_displays_field_message() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));
    let err = workbench
        .generate_roadmap(&RoadmapRequest::new(""))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "domain: Domain is required");
}

// ============================================================================
// Unreachable Backend Tests
// ============================================================================

#[tokio::test]
async fn test_each_tool_reports_its_own_failure_message() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));

    let err = workbench
        .generate_code(&CodeGenRequest::new("Implement a binary search algorithm"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate code");

    let err = workbench
        .generate_roadmap(&RoadmapRequest::new("Web Development"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Roadmap generation failed");

    let err = workbench
        .analyze_complexity(&ComplexityRequest::new(
            "for (let i = 0; i < n; i++) { sum += i; }",
        ))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to analyze complexity");

    let err = workbench
        .explain_algorithm(&AlgorithmExplainRequest::new("quicksort"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to explain algorithm");

    let err = workbench
        .generate_frontend(&FrontendRequest::new("A login page with a centered card"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate frontend code");

    let err = workbench
        .generate_api(&ApiRequest::new("A REST API for a bookstore inventory"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate API");
}

// ============================================================================
// Frontend Display Pipeline Tests
// ============================================================================

#[test]
fn test_frontend_response_splits_on_echoed_framework() {
    // The display split keys off the framework the backend echoes in its
    // response, not the one the form submitted.
    let response = FrontendCode {
        framework: "react".to_string(),
        implementation: "function App() { return <div />; }".to_string(),
        ..FrontendCode::default()
    };
    let files = split_files(
        &response.implementation,
        Framework::from(response.framework.as_str()),
    );
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "App.jsx");
    assert_eq!(files[0].language, "jsx");
}

#[test]
fn test_frontend_document_splits_into_three_files() {
    let response = FrontendCode {
        framework: "html-css-js".to_string(),
        implementation: concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n",
            "<style>body { margin: 0; }</style>\n",
            "</head>\n<body>\n<h1>Hi</h1>\n",
            "<script>console.log('hi');</script>\n",
            "</body>\n</html>"
        )
        .to_string(),
        ..FrontendCode::default()
    };
    let files = split_files(
        &response.implementation,
        Framework::from(response.framework.as_str()),
    );
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["index.html", "styles.css", "script.js"]);
    assert_eq!(files[1].content, "body { margin: 0; }");
    assert_eq!(files[2].content, "console.log('hi');");
}

// ============================================================================
// Chat Store Access Tests
// ============================================================================

#[tokio::test]
async fn test_chat_access_requires_token() {
    let workbench = unreachable_workbench(Arc::new(SignedOut));

    let err = workbench.recent_chats().await.unwrap_err();
    assert_eq!(err.to_string(), "Authentication token not available");

    let err = workbench.delete_chat("65f2a7714a").await.unwrap_err();
    assert_eq!(err.to_string(), "Authentication token not available");
}

#[tokio::test]
async fn test_chat_access_with_token_surfaces_store_failure() {
    let workbench = unreachable_workbench(Arc::new(StaticToken::new("bearer-token")));

    let err = workbench.recent_chats().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch recent chats");

    let err = workbench.delete_chat("65f2a7714a").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete chat");
}

/// Provider whose session is active but whose token has lapsed.
struct ExpiredSession;

#[async_trait::async_trait]
impl TokenProvider for ExpiredSession {
    fn is_signed_in(&self) -> bool {
        true
    }

    async fn token(&self) -> Option<String> {
        None
    }
}

#[tokio::test]
async fn test_signed_in_without_token_reports_token_unavailable() {
    // Sign-in state alone is not enough; the provider must actually yield
    // a token.
    let workbench = unreachable_workbench(Arc::new(ExpiredSession));
    let err = workbench.recent_chats().await.unwrap_err();
    assert_eq!(err.to_string(), "Authentication token not available");
}
