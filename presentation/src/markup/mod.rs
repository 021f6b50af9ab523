//! Terminal markup rendering for message bodies

mod ansi;

pub use ansi::AnsiMarkup;
