//! Infrastructure layer for agentroom
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileNotificationConfig, FileOutputConfig, FileRoundConfig, FileSessionConfig,
};
pub use http::HttpSessionClient;
pub use store::{FileSessionStore, MemorySessionStore};
