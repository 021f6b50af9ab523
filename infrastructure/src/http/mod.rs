//! HTTP adapter for the deliberation backend.
//!
//! [`HttpSessionClient`] implements the
//! [`SessionClient`](agentroom_application::SessionClient) port over
//! JSON/HTTP:
//!
//! | Operation | Request | Success body |
//! |---|---|---|
//! | create session | `POST /api/new_session` | `{ "session_id": "..." }` |
//! | fetch history | `GET /api/history/{id}` | `{ "messages": [...] }` (404 = not found) |
//! | run round | `POST /api/run_round` | `{ "messages": [...] }` |
//!
//! Non-2xx responses may carry `{ "detail": ... }`, which is passed to the
//! caller untouched.

mod client;
mod dto;

pub use client::HttpSessionClient;
