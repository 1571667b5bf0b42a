//! Inference gateway port
//!
//! Defines the interface for communicating with the inference provider.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during inference gateway operations
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A single completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Gateway for inference completions.
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Run one completion and return the raw response text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, InferenceError>;
}
