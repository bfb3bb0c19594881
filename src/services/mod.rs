//! Application Services
//!
//! Long-lived services composed from the workspace crates: the tool
//! workbench that runs validated requests end to end, and the background
//! health monitor that tracks backend availability.

pub mod health;
pub mod workbench;

pub use health::{BackendStatus, HealthMonitor, MonitorConfig};
pub use workbench::{FrontendRun, ToolRun, Workbench};
