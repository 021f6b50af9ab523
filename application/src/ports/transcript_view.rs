//! Transcript view port
//!
//! The side-effecting half of transcript rendering.

use crate::use_cases::render_transcript::RenderNode;

/// Surface that displays rendered transcript nodes
pub trait TranscriptView: Send + Sync {
    /// Replace everything currently shown with `nodes`
    fn replace(&self, nodes: &[RenderNode]);

    /// Bring the most recent node into view
    fn scroll_to_latest(&self);
}
