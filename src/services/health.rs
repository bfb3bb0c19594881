//! Backend Health Monitor
//!
//! Background task that polls the service health endpoint on a fixed
//! interval and publishes the backend's reachability through a watch
//! channel. The first check fires immediately on spawn; consumers read the
//! latest status or subscribe for transitions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use ai_tools_api::AiToolsClient;

/// Default poll interval in seconds.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Reachability of the backend service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// No check has completed yet.
    Checking,
    /// The last health check succeeded.
    Online,
    /// The last health check failed.
    Offline,
}

/// Configuration for the health monitor.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between health checks.
    pub poll_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

/// Handle to a running health monitor.
///
/// The polling task stops when [`HealthMonitor::shutdown`] is called, or on
/// its next tick after every receiver (this handle included) is gone.
pub struct HealthMonitor {
    status_rx: watch::Receiver<BackendStatus>,
    cancel_token: CancellationToken,
}

impl HealthMonitor {
    /// Spawns the polling task with the given client and interval.
    pub fn spawn(client: Arc<AiToolsClient>, config: MonitorConfig) -> Self {
        let (status_tx, status_rx) = watch::channel(BackendStatus::Checking);
        let cancel_token = CancellationToken::new();

        let cancel = cancel_token.clone();
        tokio::spawn(async move {
            Self::poll_loop(client, config, status_tx, cancel).await;
        });

        Self {
            status_rx,
            cancel_token,
        }
    }

    /// Polling loop: one health check per tick until cancelled.
    async fn poll_loop(
        client: Arc<AiToolsClient>,
        config: MonitorConfig,
        status_tx: watch::Sender<BackendStatus>,
        cancel: CancellationToken,
    ) {
        let mut interval = tokio::time::interval(config.poll_interval);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let status = match client.health_check().await {
                        Ok(()) => BackendStatus::Online,
                        Err(err) => {
                            tracing::debug!("Health check failed: {}", err);
                            BackendStatus::Offline
                        }
                    };
                    if status_tx.send(status).is_err() {
                        break;
                    }
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }
    }

    /// The most recently published status.
    pub fn status(&self) -> BackendStatus {
        *self.status_rx.borrow()
    }

    /// A receiver for status updates.
    pub fn subscribe(&self) -> watch::Receiver<BackendStatus> {
        self.status_rx.clone()
    }

    /// Stops the polling task.
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
