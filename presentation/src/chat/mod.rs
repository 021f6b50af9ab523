//! Interactive chat module
//!
//! Provides a readline-based shell that hosts the round controller.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
