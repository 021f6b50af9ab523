//! Toast notifications
//!
//! [`ToastNotifier`] implements the [`Notifier`](agentroom_application::Notifier)
//! port: the newest message replaces whatever is showing and disappears on
//! its own after a fixed delay. [`TerminalToast`] is the surface used by
//! the CLI.

mod notifier;
mod terminal;

pub use notifier::{DEFAULT_DISMISS_DELAY, ToastNotifier, ToastSurface};
pub use terminal::TerminalToast;
