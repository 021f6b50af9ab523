//! Transcript rendering
//!
//! Pure mapping from a [`Transcript`] to display nodes. Applying the nodes
//! to a screen is the job of a [`TranscriptView`](crate::TranscriptView).

use crate::ports::markup::MarkupRenderer;
use agentroom_domain::{Message, Transcript};
use tracing::debug;

/// Who wrote a node, for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// The user of this client
    Me,
    /// An agent or the backend
    Other,
}

/// Body of a rendered node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// Output of the markup renderer
    Markup(String),
    /// Literal text, one entry per line, used when markup conversion fails
    Lines(Vec<String>),
}

/// One renderable transcript entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub author: String,
    pub speaker: Speaker,
    pub body: NodeBody,
}

/// Maps messages to render nodes, delegating body markup to `markup`.
///
/// Holds no state of its own: the same transcript always yields the
/// same nodes (given a deterministic markup renderer).
pub struct TranscriptRenderer<'a> {
    markup: &'a dyn MarkupRenderer,
}

impl<'a> TranscriptRenderer<'a> {
    pub fn new(markup: &'a dyn MarkupRenderer) -> Self {
        Self { markup }
    }

    /// Render every message, preserving order
    pub fn render(&self, transcript: &Transcript) -> Vec<RenderNode> {
        transcript
            .messages()
            .iter()
            .map(|m| self.render_message(m))
            .collect()
    }

    pub fn render_message(&self, message: &Message) -> RenderNode {
        let speaker = if message.is_self() {
            Speaker::Me
        } else {
            Speaker::Other
        };

        let body = match self.markup.to_markup(&message.content) {
            Ok(markup) => NodeBody::Markup(markup),
            Err(e) => {
                debug!("Falling back to literal text for {}: {}", message.display_name(), e);
                NodeBody::Lines(literal_lines(&message.content))
            }
        };

        RenderNode {
            author: message.display_name().to_string(),
            speaker,
            body,
        }
    }
}

/// Split text on newlines so each line can be shown with a break between
fn literal_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::markup::{PlainMarkup, RenderError};

    struct FailingMarkup;

    impl MarkupRenderer for FailingMarkup {
        fn to_markup(&self, _text: &str) -> Result<String, RenderError> {
            Err(RenderError("unbalanced emphasis".to_string()))
        }
    }

    struct ShoutingMarkup;

    impl MarkupRenderer for ShoutingMarkup {
        fn to_markup(&self, text: &str) -> Result<String, RenderError> {
            if text.contains("boom") {
                Err(RenderError("boom".to_string()))
            } else {
                Ok(text.to_uppercase())
            }
        }
    }

    fn sample() -> Transcript {
        Transcript::new(vec![
            Message::user("Hello"),
            Message::agent("Moderator", "Welcome"),
            Message::new("assistant", "line one\nline two"),
        ])
    }

    #[test]
    fn test_render_preserves_order_and_authors() {
        let nodes = TranscriptRenderer::new(&PlainMarkup).render(&sample());
        let authors: Vec<_> = nodes.iter().map(|n| n.author.as_str()).collect();
        assert_eq!(authors, vec!["User", "Moderator", "assistant"]);
    }

    #[test]
    fn test_classifies_self_and_other() {
        let nodes = TranscriptRenderer::new(&PlainMarkup).render(&sample());
        assert_eq!(nodes[0].speaker, Speaker::Me);
        assert_eq!(nodes[1].speaker, Speaker::Other);
        assert_eq!(nodes[2].speaker, Speaker::Other);
    }

    #[test]
    fn test_markup_failure_falls_back_to_lines() {
        let nodes = TranscriptRenderer::new(&FailingMarkup).render(&sample());
        assert_eq!(
            nodes[2].body,
            NodeBody::Lines(vec!["line one".to_string(), "line two".to_string()])
        );
    }

    #[test]
    fn test_fallback_is_per_message() {
        let transcript = Transcript::new(vec![
            Message::agent("Coder", "fine"),
            Message::agent("Critic", "boom\r\nagain"),
        ]);
        let nodes = TranscriptRenderer::new(&ShoutingMarkup).render(&transcript);
        assert_eq!(nodes[0].body, NodeBody::Markup("FINE".to_string()));
        assert_eq!(
            nodes[1].body,
            NodeBody::Lines(vec!["boom".to_string(), "again".to_string()])
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = TranscriptRenderer::new(&ShoutingMarkup);
        assert_eq!(renderer.render(&sample()), renderer.render(&sample()));
    }

    #[test]
    fn test_empty_transcript() {
        assert!(TranscriptRenderer::new(&PlainMarkup)
            .render(&Transcript::empty())
            .is_empty());
    }
}
