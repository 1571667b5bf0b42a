//! Ports (interfaces) for the application layer

pub mod inference;
pub mod progress;

pub use inference::{CompletionRequest, InferenceError, InferenceGateway};
pub use progress::{NoProgress, ProgressNotifier};
