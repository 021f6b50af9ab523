//! Session domain.
//!
//! - [`entities::SessionId`] — the backend-assigned conversation identifier
//! - [`entities::Message`] — a single message within a transcript
//! - [`entities::Transcript`] — the complete ordered history of a session

pub mod entities;
