//! Lightweight Markdown-to-ANSI conversion
//!
//! Covers what agents actually write in a panel discussion: headings,
//! bullet lists, fenced code blocks, `**bold**`, `*italic*` and
//! `` `inline code` ``. Anything else is passed through.

use agentroom_application::{MarkupRenderer, RenderError};
use colored::Colorize;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").expect("valid bullet regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^*\w])\*([^*\s][^*]*)\*").expect("valid italic regex"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid code regex"));

/// Renders Markdown-ish message text with ANSI styling.
///
/// Fails on an unterminated code fence, leaving the caller to show the
/// text literally.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiMarkup;

impl AnsiMarkup {
    fn inline(line: &str) -> String {
        // Code spans first so their contents are not re-styled
        let mut spans = Vec::new();
        let protected = CODE.replace_all(line, |caps: &Captures| {
            spans.push(caps[1].to_string());
            format!("\u{0}{}\u{0}", spans.len() - 1)
        });

        let styled = BOLD.replace_all(&protected, |caps: &Captures| caps[1].bold().to_string());
        let styled = ITALIC.replace_all(&styled, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].italic())
        });

        let mut out = styled.into_owned();
        for (i, span) in spans.iter().enumerate() {
            out = out.replace(&format!("\u{0}{}\u{0}", i), &span.cyan().to_string());
        }
        out
    }
}

impl MarkupRenderer for AnsiMarkup {
    fn to_markup(&self, text: &str) -> Result<String, RenderError> {
        let mut lines = Vec::new();
        let mut in_fence = false;

        for raw in text.lines() {
            if raw.trim_start().starts_with("```") {
                in_fence = !in_fence;
                continue;
            }

            if in_fence {
                lines.push(format!("    {}", raw.dimmed()));
                continue;
            }

            let line = if let Some(caps) = HEADING.captures(raw) {
                Self::inline(&caps[2]).bold().underline().to_string()
            } else if let Some(caps) = BULLET.captures(raw) {
                format!("{}  • {}", &caps[1], Self::inline(&caps[2]))
            } else {
                Self::inline(raw)
            };
            lines.push(line);
        }

        if in_fence {
            return Err(RenderError("unterminated code fence".to_string()));
        }

        Ok(lines.join("\n"))
    }
}
