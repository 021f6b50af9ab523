//! Application layer for agentroom
//!
//! This crate contains the round controller, the transcript renderer and
//! the port definitions the outer layers implement.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    controls::RoundControls,
    markup::{MarkupRenderer, PlainMarkup, RenderError},
    notifier::Notifier,
    session_client::{ClientError, SessionClient},
    session_store::SessionStore,
    transcript_view::TranscriptView,
};
pub use use_cases::render_transcript::{NodeBody, RenderNode, Speaker, TranscriptRenderer};
pub use use_cases::round_controller::{
    ControllerState, InitOutcome, RoundController, RoundPorts, SubmitOutcome, messages,
};
