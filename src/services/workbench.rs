//! Tool Workbench
//!
//! One entry point per backend tool: validate the request locally, call
//! the backend, and record a two-message transcript (user prompt +
//! assistant result) in the chat store when a signed-in token is
//! available. Persistence is best-effort: a failed save is logged and the
//! run still succeeds.

use std::fmt;
use std::sync::Arc;

use ai_tools_api::{
    AiToolsClient, AlgorithmExplainRequest, AlgorithmExplanation, ApiRequest, ChatClient,
    ChatMessage, ChatRecord, CodeGenRequest, ComplexityAnalysis, ComplexityRequest, FrontendCode,
    FrontendRequest, GeneratedApi, GeneratedCode, Roadmap, RoadmapRequest,
};
use ai_tools_core::TokenProvider;
use ai_tools_splitter::{split_files, Framework, GeneratedFile};
use serde::Serialize;

use crate::config::StudioConfig;
use crate::error::{AppError, AppResult};

/// Result of one tool run.
#[derive(Debug, Clone)]
pub struct ToolRun<T> {
    /// The backend's response payload.
    pub response: T,
    /// Whether the transcript reached the chat store.
    pub transcript_saved: bool,
}

/// Result of a frontend scaffold run.
#[derive(Debug, Clone)]
pub struct FrontendRun {
    /// The backend's response payload.
    pub response: FrontendCode,
    /// Display files carved from the implementation blob, using the
    /// framework the response echoes back.
    pub files: Vec<GeneratedFile>,
    /// Whether the transcript reached the chat store.
    pub transcript_saved: bool,
}

/// Per-tool flows over one client pair and an injected identity.
pub struct Workbench {
    tools: Arc<AiToolsClient>,
    chats: ChatClient,
    identity: Arc<dyn TokenProvider>,
}

impl fmt::Debug for Workbench {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbench").finish_non_exhaustive()
    }
}

impl Workbench {
    /// Creates a workbench over existing clients.
    pub fn new(
        tools: Arc<AiToolsClient>,
        chats: ChatClient,
        identity: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            tools,
            chats,
            identity,
        }
    }

    /// Builds both clients from the application configuration.
    pub fn from_config(
        config: &StudioConfig,
        identity: Arc<dyn TokenProvider>,
    ) -> AppResult<Self> {
        config.validate()?;
        let client_config = config.client_config();
        let base_url = client_config.base_url.clone();
        let tools = AiToolsClient::with_config(client_config)?;
        let chats = ChatClient::new(base_url)?;
        Ok(Self::new(Arc::new(tools), chats, identity))
    }

    /// The tool client this workbench drives.
    pub fn tools(&self) -> &AiToolsClient {
        &self.tools
    }

    /// Runs the code generator. The transcript records the generated code
    /// itself as the assistant message.
    pub async fn generate_code(
        &self,
        request: &CodeGenRequest,
    ) -> AppResult<ToolRun<GeneratedCode>> {
        request.validate()?;
        let response = self.tools.generate_code(request).await?;
        let transcript_saved = self
            .persist_transcript(request.transcript_prompt(), response.code.clone())
            .await;
        Ok(ToolRun {
            response,
            transcript_saved,
        })
    }

    /// Runs the roadmap generator.
    pub async fn generate_roadmap(
        &self,
        request: &RoadmapRequest,
    ) -> AppResult<ToolRun<Roadmap>> {
        request.validate()?;
        let response = self.tools.generate_roadmap(request).await?;
        let transcript_saved = self
            .persist_transcript(request.transcript_prompt(), pretty_json(&response))
            .await;
        Ok(ToolRun {
            response,
            transcript_saved,
        })
    }

    /// Runs the complexity analyzer.
    pub async fn analyze_complexity(
        &self,
        request: &ComplexityRequest,
    ) -> AppResult<ToolRun<ComplexityAnalysis>> {
        request.validate()?;
        let response = self.tools.analyze_complexity(request).await?;
        let transcript_saved = self
            .persist_transcript(request.transcript_prompt(), pretty_json(&response))
            .await;
        Ok(ToolRun {
            response,
            transcript_saved,
        })
    }

    /// Runs the algorithm explainer.
    pub async fn explain_algorithm(
        &self,
        request: &AlgorithmExplainRequest,
    ) -> AppResult<ToolRun<AlgorithmExplanation>> {
        request.validate()?;
        let response = self.tools.explain_algorithm(request).await?;
        let transcript_saved = self
            .persist_transcript(request.transcript_prompt(), pretty_json(&response))
            .await;
        Ok(ToolRun {
            response,
            transcript_saved,
        })
    }

    /// Runs the frontend scaffold tool and splits the returned blob into
    /// display files. The transcript records the raw implementation.
    pub async fn generate_frontend(&self, request: &FrontendRequest) -> AppResult<FrontendRun> {
        request.validate()?;
        let response = self.tools.generate_frontend(request).await?;
        let files = split_files(
            &response.implementation,
            Framework::from(response.framework.as_str()),
        );
        let transcript_saved = self
            .persist_transcript(request.transcript_prompt(), response.implementation.clone())
            .await;
        Ok(FrontendRun {
            response,
            files,
            transcript_saved,
        })
    }

    /// Runs the API designer.
    pub async fn generate_api(&self, request: &ApiRequest) -> AppResult<ToolRun<GeneratedApi>> {
        request.validate()?;
        let response = self.tools.generate_api(request).await?;
        let transcript_saved = self
            .persist_transcript(request.transcript_prompt(), pretty_json(&response))
            .await;
        Ok(ToolRun {
            response,
            transcript_saved,
        })
    }

    /// Lists the signed-in user's chats, newest first as the store returns
    /// them.
    pub async fn recent_chats(&self) -> AppResult<Vec<ChatRecord>> {
        let token = self.require_token().await?;
        Ok(self.chats.recent_chats(&token).await?)
    }

    /// Deletes one chat by id.
    pub async fn delete_chat(&self, chat_id: &str) -> AppResult<()> {
        let token = self.require_token().await?;
        Ok(self.chats.delete_chat(chat_id, &token).await?)
    }

    /// Saves a prompt/result transcript when the identity yields a token.
    ///
    /// Returns whether the transcript was persisted. Signed-out users and
    /// providers without a token skip silently; a store failure is logged.
    async fn persist_transcript(&self, prompt: String, result: String) -> bool {
        if !self.identity.is_signed_in() {
            return false;
        }
        let Some(token) = self.identity.token().await else {
            return false;
        };

        let messages = vec![ChatMessage::user(prompt), ChatMessage::assistant(result)];
        match self.chats.save_chat(messages, &token).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Failed to save chat: {}", err);
                false
            }
        }
    }

    /// The current token, or the fixed not-available error.
    async fn require_token(&self) -> AppResult<String> {
        self.identity
            .token()
            .await
            .ok_or_else(AppError::token_unavailable)
    }
}

/// Pretty-printed JSON of a response, for transcript bodies.
fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
