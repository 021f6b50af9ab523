//! Slash commands understood by the chat REPL

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    NewSession,
    /// `/mode` alone shows the current mode
    Mode(Option<String>),
    Agents,
    Enable(String),
    Disable(String),
    Session,
    History,
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    ///
    /// Returns the error text to show the user for unknown commands or
    /// missing arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        match name {
            "/help" | "/h" | "/?" => Ok(Self::Help),
            "/quit" | "/exit" | "/q" => Ok(Self::Quit),
            "/new" => Ok(Self::NewSession),
            "/mode" => Ok(Self::Mode(arg)),
            "/agents" => Ok(Self::Agents),
            "/enable" => arg
                .map(Self::Enable)
                .ok_or_else(|| "Usage: /enable <AGENT>".to_string()),
            "/disable" => arg
                .map(Self::Disable)
                .ok_or_else(|| "Usage: /disable <AGENT>".to_string()),
            "/session" => Ok(Self::Session),
            "/history" => Ok(Self::History),
            other => Err(format!(
                "Unknown command: {}\nType /help for available commands",
                other
            )),
        }
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /help, /h, /?       - Show this help
  /new                - Start a new session
  /mode [MODE]        - Show or set the round mode
  /agents             - List agents and whether they take part
  /enable <AGENT>     - Include an agent in the next rounds
  /disable <AGENT>    - Exclude an agent from the next rounds
  /session            - Show the current session ID
  /history            - Show the transcript again
  /quit, /exit, /q    - Exit chat"
    }
}
