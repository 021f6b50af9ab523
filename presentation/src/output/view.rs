//! Terminal transcript view

use super::console::ConsoleFormatter;
use crate::terminal::Terminal;
use agentroom_application::{RenderNode, TranscriptView};
use std::sync::Arc;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Prints the transcript to stdout.
///
/// With `clear_screen` the previous transcript is wiped first so the
/// screen shows exactly the latest one; otherwise a rule separates
/// successive renders.
pub struct TerminalTranscriptView {
    terminal: Arc<Terminal>,
    clear_screen: bool,
}

impl TerminalTranscriptView {
    pub fn new(terminal: Arc<Terminal>) -> Self {
        Self {
            terminal,
            clear_screen: false,
        }
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}

impl TranscriptView for TerminalTranscriptView {
    fn replace(&self, nodes: &[RenderNode]) {
        let mut output = String::new();
        if self.clear_screen {
            output.push_str(CLEAR_SCREEN);
        } else {
            output.push_str(&format!("{}\n", "═".repeat(60)));
        }
        output.push_str(&ConsoleFormatter::format_transcript(nodes));
        self.terminal.println(output.trim_end());
    }

    fn scroll_to_latest(&self) {
        // Output ends at the newest message; nothing to move
    }
}
