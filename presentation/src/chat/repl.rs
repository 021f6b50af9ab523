//! REPL (Read-Eval-Print Loop) hosting the round controller

use super::command::ReplCommand;
use crate::controls::ReplControls;
use crate::output::console::ConsoleFormatter;
use crate::terminal::Terminal;
use agentroom_application::{
    MarkupRenderer, PlainMarkup, RoundController, RoundControls, SessionClient, SubmitOutcome,
    TranscriptRenderer,
};
use agentroom_domain::Mode;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Interactive chat REPL
pub struct ChatRepl<C: SessionClient + 'static> {
    controller: Arc<RoundController<C>>,
    controls: Arc<ReplControls>,
    terminal: Arc<Terminal>,
    markup: Arc<dyn MarkupRenderer>,
    history_path: Option<PathBuf>,
}

impl<C: SessionClient + 'static> ChatRepl<C> {
    pub fn new(
        controller: Arc<RoundController<C>>,
        controls: Arc<ReplControls>,
        terminal: Arc<Terminal>,
    ) -> Self {
        Self {
            controller,
            controls,
            terminal,
            markup: Arc::new(PlainMarkup),
            history_path: Self::default_history_path(),
        }
    }

    /// Renderer used by `/history`
    pub fn with_markup(mut self, markup: Arc<dyn MarkupRenderer>) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("agentroom").join("history.txt"))
    }

    /// Run the interactive REPL.
    ///
    /// The controller must already be initialized; the REPL never restores
    /// a session on its own.
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            // A prompt left behind by a failed round is offered again
            let pending = self.controls.prompt_text();
            let readline = if pending.is_empty() {
                rl.readline(">>> ")
            } else {
                rl.readline_with_initial(">>> ", (pending.as_str(), ""))
            };

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.starts_with('/') {
                        self.controls.clear_prompt();
                        match ReplCommand::parse(trimmed) {
                            Ok(command) => {
                                if self.handle_command(command).await {
                                    break;
                                }
                            }
                            Err(message) => self.terminal.println(&message),
                        }
                        continue;
                    }

                    if !trimmed.is_empty() {
                        let _ = rl.add_history_entry(trimmed);
                    }

                    self.controls.set_prompt(line);
                    self.submit().await;
                }
                Err(ReadlineError::Interrupted) => {
                    self.controls.clear_prompt();
                    self.terminal.println("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    self.terminal.println("Bye!");
                    break;
                }
                Err(err) => {
                    self.terminal.eprintln(&format!("Error: {:?}", err));
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Failed to save REPL history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    async fn submit(&self) {
        match self.controller.submit().await {
            SubmitOutcome::Completed => debug!("Round completed"),
            SubmitOutcome::Rejected => self.controls.clear_prompt(),
            SubmitOutcome::Failed => debug!("Round failed; prompt kept for retry"),
            SubmitOutcome::Ignored => self.terminal.println("A round is already running"),
        }
    }

    fn print_welcome(&self) {
        self.terminal.println("");
        self.terminal
            .println("╭─────────────────────────────────────────────╮");
        self.terminal
            .println("│              agentroom - Chat               │");
        self.terminal
            .println("╰─────────────────────────────────────────────╯");
        self.terminal.println("");
        self.terminal
            .println(&ConsoleFormatter::format_session(self.controller.session_id().as_ref()));
        self.terminal
            .println(&ConsoleFormatter::format_mode(&self.controls.mode()));
        self.terminal
            .println(&ConsoleFormatter::format_agents(&self.controls.toggles()));
        self.terminal.println(ReplCommand::help_text());
        self.terminal.println("");
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                self.terminal.println("Bye!");
                return true;
            }
            ReplCommand::Help => self.terminal.println(ReplCommand::help_text()),
            ReplCommand::NewSession => {
                self.controller.start_new_session().await;
            }
            ReplCommand::Mode(None) => {
                self.terminal
                    .println(&ConsoleFormatter::format_mode(&self.controls.mode()));
            }
            ReplCommand::Mode(Some(value)) => match value.parse::<Mode>() {
                Ok(mode) => {
                    self.terminal.println(&format!("Mode set to {}", mode));
                    self.controls.set_mode(mode);
                }
                Err(e) => self.terminal.eprintln(&format!("{}", e).red().to_string()),
            },
            ReplCommand::Agents => {
                self.terminal
                    .println(&ConsoleFormatter::format_agents(&self.controls.toggles()));
            }
            ReplCommand::Enable(agent) => self.toggle(&agent, true),
            ReplCommand::Disable(agent) => self.toggle(&agent, false),
            ReplCommand::Session => {
                self.terminal.println(&ConsoleFormatter::format_session(
                    self.controller.session_id().as_ref(),
                ));
            }
            ReplCommand::History => {
                let transcript = self.controller.transcript();
                let nodes = TranscriptRenderer::new(self.markup.as_ref()).render(&transcript);
                self.terminal
                    .println(ConsoleFormatter::format_transcript(&nodes).trim_end());
            }
        }
        false
    }

    fn toggle(&self, agent: &str, enabled: bool) {
        match self.controls.set_agent(agent, enabled) {
            Ok(()) => {
                let verb = if enabled { "enabled" } else { "disabled" };
                self.terminal.println(&format!("{} {}", agent, verb));
            }
            Err(e) => self.terminal.eprintln(&format!("{}", e).red().to_string()),
        }
    }
}
