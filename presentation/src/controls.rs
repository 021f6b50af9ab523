//! Round controls backed by REPL state
//!
//! The REPL owns the "widgets" the controller reads: the pending prompt,
//! the selected mode and the agent checkboxes. Disabling submission shows
//! the busy spinner.

use crate::output::console::ConsoleFormatter;
use crate::terminal::Terminal;
use agentroom_application::RoundControls;
use agentroom_domain::{AgentToggles, DomainError, Mode, SessionId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const BUSY_LABEL: &str = "Agents are deliberating...";

struct Widgets {
    prompt: String,
    mode: Mode,
    toggles: AgentToggles,
    session: Option<SessionId>,
}

pub struct ReplControls {
    widgets: Mutex<Widgets>,
    submit_enabled: AtomicBool,
    terminal: Arc<Terminal>,
    announce_session: bool,
}

impl ReplControls {
    pub fn new(terminal: Arc<Terminal>, mode: Mode, toggles: AgentToggles) -> Self {
        Self {
            widgets: Mutex::new(Widgets {
                prompt: String::new(),
                mode,
                toggles,
                session: None,
            }),
            submit_enabled: AtomicBool::new(true),
            terminal,
            announce_session: true,
        }
    }

    /// Print the `ID:` line below every redrawn transcript
    pub fn with_session_announcements(mut self, announce: bool) -> Self {
        self.announce_session = announce;
        self
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.widgets().prompt = prompt.into();
    }

    /// Current prompt text, as the user left it
    pub fn prompt_text(&self) -> String {
        self.widgets().prompt.clone()
    }

    pub fn set_mode(&self, mode: Mode) {
        self.widgets().mode = mode;
    }

    pub fn set_agent(&self, agent: &str, enabled: bool) -> Result<(), DomainError> {
        self.widgets().toggles.set(agent, enabled)
    }

    pub fn toggles(&self) -> AgentToggles {
        self.widgets().toggles.clone()
    }

    /// Last session identifier shown by the controller
    pub fn session(&self) -> Option<SessionId> {
        self.widgets().session.clone()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled.load(Ordering::SeqCst)
    }

    fn widgets(&self) -> MutexGuard<'_, Widgets> {
        self.widgets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RoundControls for ReplControls {
    fn prompt(&self) -> String {
        self.prompt_text()
    }

    fn mode(&self) -> Mode {
        self.widgets().mode.clone()
    }

    fn agent_toggles(&self) -> AgentToggles {
        self.toggles()
    }

    fn clear_prompt(&self) {
        self.widgets().prompt.clear();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.store(enabled, Ordering::SeqCst);
        if enabled {
            self.terminal.stop_spinner();
        } else {
            self.terminal.start_spinner(BUSY_LABEL);
        }
    }

    fn show_session(&self, session: Option<&SessionId>) {
        self.widgets().session = session.cloned();
        if self.announce_session {
            self.terminal
                .println(&ConsoleFormatter::format_session(session));
        }
    }
}
