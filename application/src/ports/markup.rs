//! Rich-text markup port
//!
//! Converts a message body into display markup. The conversion is owned
//! by an external renderer and is allowed to fail.

use thiserror::Error;

/// Failure while converting message text to markup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Markup rendering failed: {0}")]
pub struct RenderError(pub String);

/// Converts message text into display markup
pub trait MarkupRenderer: Send + Sync {
    fn to_markup(&self, text: &str) -> Result<String, RenderError>;
}

/// Passes text through unchanged
pub struct PlainMarkup;

impl MarkupRenderer for PlainMarkup {
    fn to_markup(&self, text: &str) -> Result<String, RenderError> {
        Ok(text.to_string())
    }
}
