//! In-memory session store

use agentroom_application::SessionStore;
use agentroom_domain::SessionId;
use std::sync::{Mutex, PoisonError};

/// Keeps the session id for the lifetime of the process only
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: Mutex<Option<SessionId>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionId> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, session: &SessionId) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    }

    fn clear(&self) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
