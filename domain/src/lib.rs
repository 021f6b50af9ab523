//! Domain layer for agentroom
//!
//! This crate contains the value objects and entities shared by every layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`SessionId`] names one ongoing conversation with the deliberation
//! backend. The backend assigns it; the client only stores and replays it.
//!
//! ## Round
//!
//! A round is one user prompt plus the backend's reply. The client sends a
//! [`RoundRequest`] and receives the complete [`Transcript`] back, which
//! replaces whatever was shown before.

pub mod core;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use core::error::DomainError;
pub use round::{
    agents::{AgentId, AgentToggles},
    mode::Mode,
    prompt::Prompt,
    request::RoundRequest,
};
pub use session::entities::{Message, SELF_NAME, SessionId, Transcript};
