//! AI Tools API
//!
//! HTTP layer of the AI Tools Studio workspace: typed request/response
//! models for the six backend tools, the tool client with its exact
//! user-facing error mapping, and the bearer-authenticated chat store
//! client.
//!
//! ## Module Organization
//!
//! - `client` - Tool endpoint client and health probe (`AiToolsClient`)
//! - `chats` - Chat store client (`ChatClient`)
//! - `error` - Failure-to-message mapping (`ApiError`)
//! - `models` - Per-tool request/response shapes and option catalogs

pub mod chats;
pub mod client;
pub mod error;
pub mod models;

// ── Clients ────────────────────────────────────────────────────────────
pub use chats::ChatClient;
pub use client::{AiToolsClient, ClientConfig};

// ── Error Types ────────────────────────────────────────────────────────
pub use error::ApiError;

// ── Models ─────────────────────────────────────────────────────────────
pub use models::*;
