//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod controls;
pub mod markup;
pub mod notifier;
pub mod session_client;
pub mod session_store;
pub mod transcript_view;
