//! Tool Request / Response Models
//!
//! One module per backend tool plus the chat store records. Requests
//! serialize camelCase and carry their own validation rules and transcript
//! prompt line. Response shapes mirror the backend's sample payloads but
//! treat every field as optional; nothing assumes the backend honors the
//! shapes exactly.

use serde::Deserialize;

pub mod algorithm;
pub mod api_scaffold;
pub mod chat;
pub mod code;
pub mod complexity;
pub mod frontend;
pub mod roadmap;

pub use algorithm::*;
pub use api_scaffold::*;
pub use chat::*;
pub use code::*;
pub use complexity::*;
pub use frontend::*;
pub use roadmap::*;

/// Envelope wrapping every successful tool response: `{"data": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolEnvelope<T> {
    pub data: T,
}
