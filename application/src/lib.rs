//! Application layer for idea-panel
//!
//! This crate contains use cases, port definitions, and execution
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    inference::{CompletionRequest, InferenceError, InferenceGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::validate_idea::{ValidateIdeaInput, ValidateIdeaUseCase};
