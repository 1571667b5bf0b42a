//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

use panel_application::ExecutionParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("execution timeouts cannot be 0")]
    InvalidTimeout,

    #[error("gateway model cannot be empty")]
    EmptyModel,

    #[error("gateway base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Raw gateway configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    /// The key itself never lives in a config file.
    pub api_key_env: String,
    /// Model name
    pub model: String,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Raw execution configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Maximum concurrent specialist invocations
    pub worker_pool_size: usize,
    /// Per-specialist timeout in seconds
    pub specialist_timeout_seconds: u64,
    /// Whole-run deadline in seconds
    pub run_deadline_seconds: u64,
    /// Token budget per completion
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f64,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            worker_pool_size: params.worker_pool_size,
            specialist_timeout_seconds: params.specialist_timeout.as_secs(),
            run_deadline_seconds: params.run_deadline.as_secs(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }
}

/// Raw result store configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path to the JSONL results file; unset disables persistence
    pub results_path: Option<String>,
}

/// Complete raw configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gateway: FileGatewayConfig,
    pub execution: FileExecutionConfig,
    pub store: FileStoreConfig,
}

impl FileConfig {
    /// Check invariants a merged config must satisfy.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.execution.specialist_timeout_seconds == 0 || self.execution.run_deadline_seconds == 0
        {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.gateway.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModel);
        }
        if self.gateway.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        Ok(())
    }

    /// Convert the execution section into application parameters.
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_worker_pool_size(self.execution.worker_pool_size)
            .with_specialist_timeout(Duration::from_secs(self.execution.specialist_timeout_seconds))
            .with_run_deadline(Duration::from_secs(self.execution.run_deadline_seconds))
            .with_max_tokens(self.execution.max_tokens)
            .with_temperature(self.execution.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gateway.api_key_env, "OPENAI_API_KEY");
        assert!(config.store.results_path.is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FileConfig::default();
        config.execution.specialist_timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_execution_params_round_through() {
        let mut config = FileConfig::default();
        config.execution.worker_pool_size = 3;
        config.execution.specialist_timeout_seconds = 15;

        let params = config.execution_params();
        assert_eq!(params.worker_pool_size, 3);
        assert_eq!(params.specialist_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [gateway]
            model = "llama-3.3-70b"

            [execution]
            worker_pool_size = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.gateway.model, "llama-3.3-70b");
        assert_eq!(config.gateway.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.execution.worker_pool_size, 4);
        assert_eq!(config.execution.specialist_timeout_seconds, 45);
    }
}
