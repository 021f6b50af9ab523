//! Session client port
//!
//! Defines the three remote operations the client performs against the
//! deliberation backend.

use agentroom_domain::{RoundRequest, SessionId, Transcript};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The backend does not know the requested session
    #[error("Session not found: {0}")]
    NotFound(String),

    /// The request never produced a structured response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success status, with the server's `detail` if it sent one
    #[error("Server error (HTTP {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    /// A success response whose body could not be understood
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Check if this error means the session is stale on the backend
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    /// Text to show the user for this failure.
    ///
    /// Server-supplied detail is shown verbatim; everything that never
    /// reached a structured answer collapses to one generic message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => format!("Error: {}", detail),
            ClientError::Server { status, .. } => {
                format!("Error: request failed (HTTP {})", status)
            }
            ClientError::NotFound(_) | ClientError::Transport(_) | ClientError::Decode(_) => {
                crate::use_cases::round_controller::messages::CONNECTION_ERROR.to_string()
            }
        }
    }
}

/// Typed access to the deliberation backend.
///
/// Every call is a single request/response: no retries, no caching and
/// no partial results. Implementations live in the infrastructure layer.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Ask the backend for a fresh session
    async fn create_session(&self) -> Result<SessionId, ClientError>;

    /// Fetch the full transcript of `session`.
    ///
    /// Returns [`ClientError::NotFound`] when the backend has no such session.
    async fn fetch_history(&self, session: &SessionId) -> Result<Transcript, ClientError>;

    /// Run one deliberation round and return the complete updated transcript
    async fn run_round(&self, request: &RoundRequest) -> Result<Transcript, ClientError>;
}
