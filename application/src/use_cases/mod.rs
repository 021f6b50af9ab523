//! Use cases (application services)

pub mod render_transcript;
pub mod round_controller;
