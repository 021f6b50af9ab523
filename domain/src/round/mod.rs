//! Round domain.
//!
//! Everything the client assembles when the user submits a prompt:
//!
//! - [`prompt::Prompt`] — validated, trimmed user prompt
//! - [`mode::Mode`] — how the backend's agents deliberate this round
//! - [`agents::AgentToggles`] — which agents take part
//! - [`request::RoundRequest`] — the request body sent to the backend

pub mod agents;
pub mod mode;
pub mod prompt;
pub mod request;
