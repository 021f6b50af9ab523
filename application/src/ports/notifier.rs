//! Notification port
//!
//! Transient user-visible status messages ("toasts").

/// Shows a short status message to the user.
///
/// Implementations decide how long the message stays visible; the
/// presentation layer's toast notifier dismisses it automatically.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
