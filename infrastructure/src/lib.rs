//! Infrastructure layer for idea-panel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod inference;
pub mod persistence;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileGatewayConfig};
pub use inference::OpenAiGateway;
pub use persistence::JsonlResultWriter;
