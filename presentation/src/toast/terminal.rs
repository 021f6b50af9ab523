//! Terminal toast surface

use super::notifier::ToastSurface;
use crate::terminal::Terminal;
use colored::Colorize;
use std::sync::{Arc, Mutex, PoisonError};

/// Prints toasts as a highlighted status line.
///
/// Printed lines cannot be taken back, so dismissal only clears the
/// status slot reported by [`current`](Self::current).
pub struct TerminalToast {
    terminal: Arc<Terminal>,
    current: Mutex<Option<String>>,
}

impl TerminalToast {
    pub fn new(terminal: Arc<Terminal>) -> Self {
        Self {
            terminal,
            current: Mutex::new(None),
        }
    }

    /// The toast currently considered visible
    pub fn current(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn styled(message: &str) -> String {
        if message.starts_with("Error") {
            format!("{} {}", "!".red().bold(), message.red())
        } else {
            format!("{} {}", "»".cyan().bold(), message.cyan())
        }
    }
}

impl ToastSurface for TerminalToast {
    fn show(&self, message: &str) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
        self.terminal.eprintln(&Self::styled(message));
    }

    fn dismiss(&self) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_tracks_show_and_dismiss() {
        let toast = TerminalToast::new(Arc::new(Terminal::new()));
        assert_eq!(toast.current(), None);

        toast.show("Error: rate limited");
        assert_eq!(toast.current().as_deref(), Some("Error: rate limited"));

        toast.dismiss();
        assert_eq!(toast.current(), None);
    }
}
