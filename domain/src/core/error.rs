//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Session id cannot be empty")]
    EmptySessionId,

    #[error("Mode cannot be empty")]
    EmptyMode,

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),
}
