//! Configuration file loading for agentroom
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `AGENTROOM_` (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./agentroom.toml` or `./.agentroom.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/agentroom/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileNotificationConfig, FileOutputConfig, FileRoundConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
