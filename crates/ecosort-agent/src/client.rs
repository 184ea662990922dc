//! HTTP client for the external chat-completions API.
//!
//! The wire shape is the OpenAI-style chat-completions contract the GigaChat
//! API speaks: a JSON request with `model`, `messages`, `max_tokens` and
//! `temperature`, a response with `choices[0].message.content`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use ecosort_core::config::LLM_API_KEY_ENV;
use ecosort_session::Turn;

use crate::config::ModelConfig;
use crate::error::{GatewayError, Result};

/// Timeout for a single completion request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The single capability the rest of the system needs from the external
/// text-generation service: submit ordered turns, receive generated text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Submit the full conversation snapshot and return the generated text.
    async fn submit(&self, turns: &[Turn]) -> Result<String>;
}

/// Chat-completions API client.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    config: ModelConfig,
}

impl ChatClient {
    /// Create a client with the given bearer token and model configuration.
    pub fn new(api_key: impl Into<String>, config: ModelConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create a client from environment variables.
    ///
    /// Uses `LLM_API_KEY` for the bearer token; `LLM_API_URL` and `LLM_MODEL`
    /// are picked up by [`ModelConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(LLM_API_KEY_ENV).map_err(|_| {
            GatewayError::Configuration(format!(
                "Missing {LLM_API_KEY_ENV} environment variable"
            ))
        })?;
        Self::new(api_key, ModelConfig::from_env())
    }

    /// POST one completion request and parse the response body.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(self.config.temperature),
        };

        trace!("Sending chat request: {:?}", request);

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        debug!(
            tokens = parsed.usage.as_ref().map_or(0, |u| u.total_tokens),
            "Chat response received"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl CompletionService for ChatClient {
    async fn submit(&self, turns: &[Turn]) -> Result<String> {
        let messages = turns.iter().map(ChatMessage::from_turn).collect();
        let response = self.chat(messages).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(GatewayError::EmptyResponse)
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One `{role, content}` pair on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Convert a history turn to its wire form.
    ///
    /// [`Role`](ecosort_session::Role) renders as the exact wire role string
    /// ("system", "user", "assistant").
    pub fn from_turn(turn: &Turn) -> Self {
        Self {
            role: turn.role.to_string(),
            content: turn.content.clone(),
        }
    }
}

/// Response body from the chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    /// Token accounting, when the service reports it.
    pub usage: Option<ChatUsage>,
}

impl ChatResponse {
    /// The first choice's generated text.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

/// The generated message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: String,
}

/// Token accounting reported by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
