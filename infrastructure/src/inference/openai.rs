//! OpenAI-compatible chat completion adapter.
//!
//! Implements the [`InferenceGateway`] port against any endpoint speaking
//! the `/chat/completions` wire format. The HTTP client carries no request
//! timeout of its own; the use case enforces deadlines around the call.

use crate::config::FileGatewayConfig;
use async_trait::async_trait;
use panel_application::ports::inference::{CompletionRequest, InferenceError, InferenceGateway};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Gateway to an OpenAI-compatible completion endpoint.
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a gateway from config, resolving the API key from the
    /// environment variable the config names.
    pub fn from_config(config: &FileGatewayConfig) -> Result<Self, InferenceError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            InferenceError::ConnectionError(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;
        Ok(Self::new(&config.base_url, api_key, &config.model))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl InferenceGateway for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, InferenceError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.prompt },
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        debug!(model = %self.model, endpoint = %self.endpoint(), "sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout
                } else if e.is_connect() {
                    InferenceError::ConnectionError(e.to_string())
                } else {
                    InferenceError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let snippet: String = detail.chars().take(200).collect();
            return Err(InferenceError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                snippet
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| InferenceError::MalformedResponse("no choices in response".to_string()))
    }
}
