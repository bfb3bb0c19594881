//! Chat Transcript Models
//!
//! Records owned by the remote chat store plus the display helpers the
//! recent-chats list uses (derived title, preview line, relative age).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One transcript message.
///
/// Roles are free strings; `user` and `assistant` are what the tools write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    /// Client-side timestamp, omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatMessage {
    /// Creates a `user` message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            timestamp: None,
        }
    }

    /// Creates an `assistant` message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
            timestamp: None,
        }
    }
}

/// Body of a save-chat request: the transcript to persist.
#[derive(Debug, Clone, Serialize)]
pub struct SaveChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// A persisted chat as the store returns it.
///
/// The store names its identifier `_id`; `created_at` / `updated_at` are
/// store-owned and always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response of the list-chats endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatList {
    /// Missing field decodes as no chats.
    #[serde(default)]
    pub chats: Vec<ChatRecord>,
}

impl ChatRecord {
    /// Derives a short title from the first message.
    ///
    /// Tool prompts are recognized by their lead-in words; anything else is
    /// truncated to 30 characters.
    pub fn title(&self) -> String {
        let Some(first) = self.messages.first() else {
            return "Untitled Chat".to_string();
        };
        let content = first.content.as_str();

        if content.contains("Generate") {
            title_between(content, "Generate", "for:", "Code Generation")
        } else if content.contains("Explain") {
            title_between(content, "Explain", "algorithm", "Algorithm Explanation")
        } else if content.contains("Analyze") {
            "Complexity Analysis".to_string()
        } else if content.contains("roadmap") {
            "Learning Roadmap".to_string()
        } else if content.contains("API") {
            "API Generation".to_string()
        } else if content.contains("frontend") {
            "Frontend Development".to_string()
        } else {
            let short: String = content.chars().take(30).collect();
            if content.chars().count() > 30 {
                format!("{}...", short)
            } else {
                short
            }
        }
    }

    /// Derives a one-line preview from the last message, truncated to 100
    /// characters.
    pub fn preview(&self) -> String {
        let Some(last) = self.messages.last() else {
            return "No messages".to_string();
        };
        let content = last.content.as_str();
        if content.chars().count() > 100 {
            let short: String = content.chars().take(100).collect();
            format!("{}...", short)
        } else {
            content.to_string()
        }
    }

    /// Formats the update time relative to `now`: `Just now` under an hour,
    /// then hours, then days, then the plain date after a week.
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        let hours = now.signed_duration_since(self.updated_at).num_hours();
        if hours < 1 {
            "Just now".to_string()
        } else if hours < 24 {
            format!("{}h ago", hours)
        } else if hours < 168 {
            format!("{}d ago", hours / 24)
        } else {
            self.updated_at.format("%Y-%m-%d").to_string()
        }
    }
}

/// Title text between `marker` and `stop`, trimmed; `fallback` when the
/// extracted piece is empty.
fn title_between(content: &str, marker: &str, stop: &str, fallback: &str) -> String {
    let Some(tail) = content.split(marker).nth(1) else {
        return fallback.to_string();
    };
    let head = tail.split(stop).next().unwrap_or(tail).trim();
    if head.is_empty() {
        fallback.to_string()
    } else {
        head.to_string()
    }
}
