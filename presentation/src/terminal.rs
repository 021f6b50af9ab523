//! Shared terminal output
//!
//! Every writer in the presentation layer goes through [`Terminal`] so
//! printed lines never tear the busy spinner.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{IsTerminal, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Line-oriented terminal writer with an optional busy spinner
#[derive(Default)]
pub struct Terminal {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether stdout is an interactive terminal
    pub fn is_interactive() -> bool {
        std::io::stdout().is_terminal()
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Print a line to stdout
    pub fn println(&self, line: &str) {
        self.with_spinner_suspended(|| {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        });
    }

    /// Print a line to stderr
    pub fn eprintln(&self, line: &str) {
        self.with_spinner_suspended(|| eprintln!("{}", line));
    }

    /// Show a spinner with `label` until [`stop_spinner`](Self::stop_spinner)
    pub fn start_spinner(&self, label: &str) {
        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pb) = slot.as_ref() {
            pb.set_message(label.to_string());
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(pb);
    }

    pub fn stop_spinner(&self) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn with_spinner_suspended<F: FnOnce()>(&self, f: F) {
        let slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let terminal = Terminal::new();
        assert!(!terminal.is_spinning());

        terminal.start_spinner("Agents are deliberating...");
        terminal.start_spinner("relabel");
        assert!(terminal.is_spinning());

        terminal.stop_spinner();
        assert!(!terminal.is_spinning());
        // Stopping twice is harmless
        terminal.stop_spinner();
    }
}
