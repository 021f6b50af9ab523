//! Session store port
//!
//! Durable persistence of the active session identifier across restarts.

use agentroom_domain::SessionId;

/// Key/value persistence of the current [`SessionId`].
///
/// The backing medium may be unavailable (read-only disk, missing
/// directory, corrupted file). Implementations swallow those failures:
/// `get` reports `None` and `set`/`clear` become no-ops. Nothing here
/// is allowed to surface an error to the caller.
pub trait SessionStore: Send + Sync {
    /// The stored session, or `None` if absent or unreadable
    fn get(&self) -> Option<SessionId>;

    /// Persist `session`, replacing any previous value
    fn set(&self, session: &SessionId);

    /// Forget the stored session
    fn clear(&self);
}
