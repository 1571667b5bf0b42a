//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileExecutionConfig, FileGatewayConfig, FileStoreConfig,
};
pub use loader::ConfigLoader;
