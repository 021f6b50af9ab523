//! Auto-dismissing, last-write-wins notifier

use agentroom_application::Notifier;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How long a toast stays up
pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// Where toasts are drawn
pub trait ToastSurface: Send + Sync + 'static {
    /// Display `message`, replacing any toast currently shown
    fn show(&self, message: &str);

    /// Remove the toast currently shown
    fn dismiss(&self);
}

/// The dismissal timer belonging to the toast currently on screen
struct Pending {
    generation: u64,
    cancel: CancellationToken,
}

#[derive(Default)]
struct State {
    generation: u64,
    pending: Option<Pending>,
}

/// Shows one toast at a time and schedules its dismissal.
///
/// A new toast cancels the previous toast's timer before starting its
/// own, so an old timer can never clear a newer message. Timers run on
/// the ambient tokio runtime; outside a runtime toasts are shown but
/// stay up until replaced.
pub struct ToastNotifier<S: ToastSurface> {
    surface: Arc<S>,
    delay: Duration,
    state: Arc<Mutex<State>>,
}

impl<S: ToastSurface> ToastNotifier<S> {
    pub fn new(surface: S) -> Self {
        Self::with_delay(surface, DEFAULT_DISMISS_DELAY)
    }

    pub fn with_delay(surface: S, delay: Duration) -> Self {
        Self {
            surface: Arc::new(surface),
            delay,
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ToastSurface> Notifier for ToastNotifier<S> {
    fn notify(&self, message: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = state.pending.take() {
            debug!("Cancelling dismissal of toast #{}", previous.generation);
            previous.cancel.cancel();
        }

        state.generation += 1;
        let generation = state.generation;
        self.surface.show(message);

        let Ok(handle) = Handle::try_current() else {
            warn!("No async runtime; toast #{} will not auto-dismiss", generation);
            return;
        };

        let cancel = CancellationToken::new();
        state.pending = Some(Pending {
            generation,
            cancel: cancel.clone(),
        });
        drop(state);

        let surface = Arc::clone(&self.surface);
        let shared = Arc::clone(&self.state);
        let delay = self.delay;

        handle.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
                    // A newer toast may have replaced us between wake-up and lock
                    let current = state.pending.as_ref().map(|p| p.generation);
                    if current == Some(generation) {
                        state.pending = None;
                        surface.dismiss();
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Show(String),
        Dismiss,
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Mutex<Vec<Event>>,
    }

    impl ToastSurface for RecordingSurface {
        fn show(&self, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Show(message.to_string()));
        }

        fn dismiss(&self) {
            self.events.lock().unwrap().push(Event::Dismiss);
        }
    }

    fn events(notifier: &ToastNotifier<RecordingSurface>) -> Vec<Event> {
        notifier.surface().events.lock().unwrap().clone()
    }

    fn show(message: &str) -> Event {
        Event::Show(message.to_string())
    }

    /// Advance paused time and let woken timer tasks run
    async fn settle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismisses_after_delay() {
        let notifier = ToastNotifier::new(RecordingSurface::default());
        notifier.notify("New Session Started");

        settle(2999).await;
        assert_eq!(events(&notifier), vec![show("New Session Started")]);

        settle(2).await;
        assert_eq!(
            events(&notifier),
            vec![show("New Session Started"), Event::Dismiss]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_toast_cancels_first_dismissal() {
        let notifier = ToastNotifier::new(RecordingSurface::default());
        notifier.notify("first");

        settle(2000).await;
        notifier.notify("second");

        // Past the first toast's deadline: nothing may be dismissed yet
        settle(1500).await;
        assert_eq!(events(&notifier), vec![show("first"), show("second")]);

        // The second toast gets its own full delay
        settle(1501).await;
        assert_eq!(
            events(&notifier),
            vec![show("first"), show("second"), Event::Dismiss]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_toasts_dismiss_once() {
        let notifier = ToastNotifier::with_delay(RecordingSurface::default(), Duration::from_millis(100));
        for i in 0..5 {
            notifier.notify(&format!("toast {i}"));
        }

        settle(500).await;
        let dismissals = events(&notifier)
            .into_iter()
            .filter(|e| *e == Event::Dismiss)
            .count();
        assert_eq!(dismissals, 1);
        assert_eq!(events(&notifier).len(), 6);
    }

    #[test]
    fn test_outside_runtime_still_shows() {
        let notifier = ToastNotifier::new(RecordingSurface::default());
        notifier.notify("no runtime");
        assert_eq!(events(&notifier), vec![show("no runtime")]);
    }
}
