//! Prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user prompt that is safe to send (Value Object)
///
/// Leading and trailing whitespace is trimmed; the result is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Trim and validate raw input from the prompt field
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let content = raw.trim();
        if content.is_empty() {
            Err(DomainError::EmptyPrompt)
        } else {
            Ok(Self {
                content: content.to_string(),
            })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TryFrom<String> for Prompt {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
