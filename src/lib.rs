//! AI Tools Studio
//!
//! Application layer for the AI Tools Studio dashboard: configuration
//! loaded from the environment, the tool workbench that validates
//! requests, calls the backend, and persists transcripts, and the
//! background monitor that polls backend health. Embedding hosts supply
//! an identity via the [`TokenProvider`] capability and render whatever
//! these services return.
//!
//! ## Module Organization
//!
//! - `config` - Environment-derived application configuration
//! - `error` - Application error type aggregating the workspace crates
//! - `services` - Tool workbench and backend health monitor

pub mod config;
pub mod error;
pub mod services;

// ── Configuration ──────────────────────────────────────────────────────
pub use config::{StudioConfig, APP_NAME};

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{AppError, AppResult};

// ── Services ───────────────────────────────────────────────────────────
pub use services::{BackendStatus, FrontendRun, HealthMonitor, MonitorConfig, ToolRun, Workbench};

// ── Workspace Crates ───────────────────────────────────────────────────
pub use ai_tools_api::models::*;
pub use ai_tools_api::{AiToolsClient, ApiError, ChatClient, ClientConfig};
pub use ai_tools_core::{FieldErrors, SignedOut, StaticToken, StringOrStructured, TokenProvider};
pub use ai_tools_splitter::{split_files, Framework, GeneratedFile};
