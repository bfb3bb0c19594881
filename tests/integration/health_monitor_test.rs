//! Health Monitor Integration Tests
//!
//! Spawns the monitor against a closed local port and verifies the
//! published status transitions and the fixed availability message.

use std::sync::Arc;
use std::time::Duration;

use ai_tools_studio::{AiToolsClient, BackendStatus, HealthMonitor, MonitorConfig, StudioConfig};

fn unreachable_client() -> Arc<AiToolsClient> {
    let config = StudioConfig {
        api_base_url: "http://127.0.0.1:1/api/ai-tools".to_string(),
        health_base_url: "http://127.0.0.1:1/api".to_string(),
        timeout: Duration::from_secs(2),
        ..StudioConfig::default()
    };
    Arc::new(AiToolsClient::with_config(config.client_config()).unwrap())
}

#[tokio::test]
async fn test_monitor_reports_unreachable_backend_offline() {
    let monitor = HealthMonitor::spawn(
        unreachable_client(),
        MonitorConfig {
            poll_interval: Duration::from_millis(50),
        },
    );

    let mut rx = monitor.subscribe();
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|status| *status == BackendStatus::Offline),
    )
    .await;
    assert!(result.is_ok(), "monitor never reported offline");
    assert_eq!(monitor.status(), BackendStatus::Offline);

    monitor.shutdown();
}

#[tokio::test]
async fn test_health_check_failure_uses_fixed_message() {
    // Every probe failure surfaces the same availability message, whatever
    // the transport error was.
    let err = unreachable_client().health_check().await.unwrap_err();
    assert_eq!(err.to_string(), "Backend service is not available");
}

#[tokio::test]
async fn test_monitor_keeps_polling_after_failures() {
    let monitor = HealthMonitor::spawn(
        unreachable_client(),
        MonitorConfig {
            poll_interval: Duration::from_millis(20),
        },
    );

    let mut rx = monitor.subscribe();
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|status| *status == BackendStatus::Offline),
    )
    .await;
    assert!(result.is_ok());
    // Release the `watch::Ref` borrow of `rx` before reusing the receiver.
    drop(result);

    // A further publication proves the loop survived the failed check.
    rx.mark_unchanged();
    let result = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await;
    assert!(result.is_ok(), "monitor stopped publishing after a failure");
    assert_eq!(monitor.status(), BackendStatus::Offline);

    monitor.shutdown();
}
