//! Chat Store Client
//!
//! Persists tool transcripts to the backend chat store and reads them back.
//! The chat endpoints live under the same base URL as the tools but behave
//! differently: every call carries a bearer token, error bodies use an
//! `error` field, there is no 503 special case, and requests have no
//! timeout.

use crate::error::ApiError;
use crate::models::{ChatList, ChatMessage, ChatRecord, SaveChatRequest};

/// HTTP client for the backend chat store.
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    /// Creates a client for the given tools base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::failed("Failed to create HTTP client", e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a client wrapping an existing `reqwest::Client`.
    pub fn with_reqwest_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Saves a transcript: `POST {base}/chats`.
    pub async fn save_chat(&self, messages: Vec<ChatMessage>, token: &str) -> Result<(), ApiError> {
        tracing::debug!("Saving chat with {} messages", messages.len());

        let url = format!("{}/chats", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&SaveChatRequest { messages })
            .send()
            .await
            .map_err(|e| ApiError::failed("Failed to save chat", e.to_string()))?;

        tracing::debug!("Save chat response status: {}", response.status());
        self.check(response, "Failed to save chat").await?;
        Ok(())
    }

    /// Lists the caller's chats: `GET {base}/chats`.
    pub async fn recent_chats(&self, token: &str) -> Result<Vec<ChatRecord>, ApiError> {
        let url = format!("{}/chats", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::failed("Failed to fetch recent chats", e.to_string()))?;

        tracing::debug!("Get chats response status: {}", response.status());
        let response = self.check(response, "Failed to fetch recent chats").await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::failed("Failed to fetch recent chats", e.to_string()))?;

        let list: ChatList = serde_json::from_str(&body)?;
        Ok(list.chats)
    }

    /// Deletes one chat by id: `DELETE {base}/chats/{id}`.
    pub async fn delete_chat(&self, chat_id: &str, token: &str) -> Result<(), ApiError> {
        tracing::debug!("Deleting chat {}", chat_id);

        let url = format!("{}/chats/{}", self.base_url, chat_id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::failed("Failed to delete chat", e.to_string()))?;

        tracing::debug!("Delete chat response status: {}", response.status());
        self.check(response, "Failed to delete chat").await?;
        Ok(())
    }

    /// Maps a non-success status through the chat error rules.
    async fn check(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Chat request failed with HTTP {}: {}", status.as_u16(), body);
        Err(ApiError::from_chat_status(status.as_u16(), &body, fallback))
    }
}
