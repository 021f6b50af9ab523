//! Session domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Display name the backend gives to turns written by the user
pub const SELF_NAME: &str = "User";

/// Backend-assigned identifier of one conversation (Value Object)
///
/// Never empty. A session is never mutated, only replaced wholesale by
/// a freshly created one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Create a session id, rejecting empty or whitespace-only input.
    ///
    /// The id is opaque and kept verbatim, padding included.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptySessionId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message in a transcript (Entity)
///
/// Immutable once received. `name` is the speaking agent (or `User`);
/// older backends only send `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: None,
            content: content.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// A user turn as the backend records it
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content).with_name(SELF_NAME)
    }

    /// An agent turn as the backend records it
    pub fn agent(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new("assistant", content).with_name(name)
    }

    /// The name shown above the message: `name` if present, else `role`.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.role,
        }
    }

    /// Whether the message was written by the user of this client.
    pub fn is_self(&self) -> bool {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name == SELF_NAME,
            _ => self.role.eq_ignore_ascii_case("user"),
        }
    }
}

/// Complete ordered message history of a session (Entity)
///
/// Always received in full from the backend. Order is server-assigned
/// and never changed by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for Transcript {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}
