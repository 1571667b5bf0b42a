//! Execution parameters — run loop control.
//!
//! [`ExecutionParams`] groups the static parameters that control wave
//! execution in [`ValidateIdeaUseCase`](crate::use_cases::validate_idea::ValidateIdeaUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wave execution control parameters.
///
/// Controls the worker pool bound, per-specialist timeout, overall run
/// deadline, and the completion request shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum concurrent specialist invocations within a wave.
    pub worker_pool_size: usize,
    /// Timeout for a single specialist invocation.
    pub specialist_timeout: Duration,
    /// Wall-clock deadline for the whole run.
    pub run_deadline: Duration,
    /// Token budget per completion.
    pub max_tokens: u32,
    /// Sampling temperature. Low by default: evaluations should be stable.
    pub temperature: f64,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            worker_pool_size: 10,
            specialist_timeout: Duration::from_secs(45),
            run_deadline: Duration::from_secs(20 * 60),
            max_tokens: 1000,
            temperature: 0.2,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_worker_pool_size(mut self, size: usize) -> Self {
        self.worker_pool_size = size.max(1);
        self
    }

    pub fn with_specialist_timeout(mut self, timeout: Duration) -> Self {
        self.specialist_timeout = timeout;
        self
    }

    pub fn with_run_deadline(mut self, deadline: Duration) -> Self {
        self.run_deadline = deadline;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }
}
