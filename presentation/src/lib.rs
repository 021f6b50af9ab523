//! Presentation layer for agentroom
//!
//! This crate contains CLI definitions, terminal rendering, the toast
//! notifier and the interactive chat shell that hosts the round controller.

pub mod chat;
pub mod cli;
pub mod controls;
pub mod markup;
pub mod output;
pub mod terminal;
pub mod toast;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use controls::ReplControls;
pub use markup::AnsiMarkup;
pub use output::{console::ConsoleFormatter, view::TerminalTranscriptView};
pub use terminal::Terminal;
pub use toast::{TerminalToast, ToastNotifier, ToastSurface};
