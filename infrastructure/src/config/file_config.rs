//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on use.

use agentroom_domain::{AgentToggles, DomainError, Mode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors for configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("round.mode: {0}")]
    InvalidMode(DomainError),

    #[error("agent name cannot be empty")]
    EmptyAgentName,

    #[error("round.enabled names an agent missing from round.agents: {0}")]
    UnknownEnabledAgent(String),

    #[error("notification.dismiss_ms cannot be 0")]
    ZeroDismissDelay,
}

/// Backend connection (`[backend]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the deliberation backend
    pub base_url: String,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

/// Session persistence (`[session]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// File holding the active session id (platform data dir if unset)
    pub store_path: Option<PathBuf>,
}

/// Round defaults (`[round]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoundConfig {
    /// Initial deliberation mode
    pub mode: String,
    /// Agents offered as toggles, in display order
    pub agents: Vec<String>,
    /// Agents checked at startup (all of `agents` if unset)
    pub enabled: Option<Vec<String>>,
}

impl Default for FileRoundConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default().to_string(),
            agents: AgentToggles::DEFAULT_ROSTER
                .iter()
                .map(|s| s.to_string())
                .collect(),
            enabled: None,
        }
    }
}

impl FileRoundConfig {
    pub fn parse_mode(&self) -> Result<Mode, ConfigValidationError> {
        self.mode.parse().map_err(ConfigValidationError::InvalidMode)
    }

    /// Toggle set described by `agents` and `enabled`
    pub fn agent_toggles(&self) -> AgentToggles {
        let mut toggles = AgentToggles::new(self.agents.iter().map(String::as_str));
        if let Some(enabled) = &self.enabled {
            toggles.retain_enabled(enabled);
        }
        toggles
    }
}

/// Toast notifications (`[notification]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationConfig {
    /// Auto-dismiss delay in milliseconds
    pub dismiss_ms: u64,
}

impl Default for FileNotificationConfig {
    fn default() -> Self {
        Self { dismiss_ms: 3000 }
    }
}

/// Output settings (`[output]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Log destination (`[logging]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write logs to this file instead of stderr
    pub file: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    pub session: FileSessionConfig,
    pub round: FileRoundConfig,
    pub notification: FileNotificationConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        self.round.parse_mode()?;

        if self.round.agents.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyAgentName);
        }

        if let Some(enabled) = &self.round.enabled {
            for name in enabled {
                if !self.round.agents.contains(name) {
                    return Err(ConfigValidationError::UnknownEnabledAgent(name.clone()));
                }
            }
        }

        if self.notification.dismiss_ms == 0 {
            return Err(ConfigValidationError::ZeroDismissDelay);
        }

        Ok(())
    }
}
