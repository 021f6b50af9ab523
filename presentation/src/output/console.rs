//! Console formatter for transcripts and client status

use agentroom_application::{NodeBody, RenderNode, Speaker};
use agentroom_domain::{AgentToggles, Mode, SessionId};
use colored::Colorize;

/// Formats render nodes and status blocks for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a whole transcript, one block per node
    pub fn format_transcript(nodes: &[RenderNode]) -> String {
        if nodes.is_empty() {
            return format!("{}\n", "(no messages yet)".dimmed());
        }

        nodes
            .iter()
            .map(Self::format_node)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a single node: author line, then the indented body
    pub fn format_node(node: &RenderNode) -> String {
        let author = match node.speaker {
            Speaker::Me => format!("── {} ──", node.author).green().bold(),
            Speaker::Other => format!("── {} ──", node.author).yellow().bold(),
        };

        let body = match &node.body {
            NodeBody::Markup(markup) => Self::indent(markup, "  "),
            NodeBody::Lines(lines) => Self::indent(&lines.join("\n"), "  "),
        };

        format!("{}\n{}\n", author, body)
    }

    pub fn format_session(session: Option<&SessionId>) -> String {
        match session {
            Some(id) => format!("{} {}", "ID:".dimmed(), id.to_string().bold()),
            None => format!("{} {}", "ID:".dimmed(), "(none)".red()),
        }
    }

    pub fn format_agents(toggles: &AgentToggles) -> String {
        let mut output = format!("{}\n", "Agents:".cyan().bold());
        for toggle in toggles.iter() {
            let mark = if toggle.enabled {
                "[x]".green().to_string()
            } else {
                "[ ]".dimmed().to_string()
            };
            output.push_str(&format!("  {} {}\n", mark, toggle.agent));
        }
        output
    }

    pub fn format_mode(mode: &Mode) -> String {
        let known = Mode::known()
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} {} {}",
            "Mode:".cyan().bold(),
            mode,
            format!("(known: {})", known).dimmed()
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
