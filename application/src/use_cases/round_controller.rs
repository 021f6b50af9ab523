//! Round controller use case
//!
//! The state machine tying session storage, the backend client, the
//! transcript renderer and the notifier together.
//!
//! ```text
//!            initialize() / start_new_session()
//!   Idle ─────────────────────────────────────▶ Restoring ──┐
//!    ▲                                                      │
//!    │◀─────────────────────────────────────────────────────┘
//!    │            submit() (prompt non-empty)
//!    ├────────────────────────────────────────▶ Submitting ─┐
//!    │                                                      │
//!    │◀──────────── Error (transient) ◀── on failure ───────┤
//!    └◀─────────────────────────────────── on success ──────┘
//! ```
//!
//! Only one transition runs at a time. While one is in progress every
//! other entry point returns immediately without touching the network.

use crate::ports::controls::RoundControls;
use crate::ports::markup::MarkupRenderer;
use crate::ports::notifier::Notifier;
use crate::ports::session_client::SessionClient;
use crate::ports::session_store::SessionStore;
use crate::ports::transcript_view::TranscriptView;
use crate::use_cases::render_transcript::TranscriptRenderer;
use agentroom_domain::{Prompt, RoundRequest, SessionId, Transcript};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// User-facing notification texts
pub mod messages {
    pub const NEW_SESSION: &str = "New Session Started";
    pub const EMPTY_PROMPT: &str = "Please enter a prompt";
    pub const CONNECTION_ERROR: &str = "Error connecting to backend!";
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    /// Restoring a stored session or creating a new one
    Restoring,
    /// A round request is in flight
    Submitting,
    /// A failure is being reported; always folds back to `Idle`
    Error,
}

/// Result of [`RoundController::initialize`] and
/// [`RoundController::start_new_session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The stored session was restored with its history
    Restored(SessionId),
    /// A new session was created and persisted
    Created(SessionId),
    /// No session could be established; the next submission retries
    Failed,
    /// Another transition was in progress
    Ignored,
}

/// Result of [`RoundController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The round ran and its transcript is displayed
    Completed,
    /// The prompt was empty; nothing was sent
    Rejected,
    /// The round (or session creation) failed; the prompt is untouched
    Failed,
    /// Another transition was in progress; nothing was sent
    Ignored,
}

/// Adapters the controller drives besides the backend client
#[derive(Clone)]
pub struct RoundPorts {
    pub store: Arc<dyn SessionStore>,
    pub notifier: Arc<dyn Notifier>,
    pub controls: Arc<dyn RoundControls>,
    pub view: Arc<dyn TranscriptView>,
    pub markup: Arc<dyn MarkupRenderer>,
}

#[derive(Debug)]
struct Inner {
    state: ControllerState,
    session: Option<SessionId>,
    transcript: Transcript,
}

/// Owns the current session and transcript; the only writer of either.
pub struct RoundController<C: SessionClient + 'static> {
    client: Arc<C>,
    ports: RoundPorts,
    inner: Mutex<Inner>,
}

/// Marks the controller busy for its lifetime.
///
/// Dropping it returns the controller to `Idle` and re-enables the submit
/// control, so an abandoned future never leaves submissions locked out.
struct BusyGuard<'a> {
    inner: &'a Mutex<Inner>,
    controls: &'a dyn RoundControls,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        debug!("{:?} -> Idle", inner.state);
        inner.state = ControllerState::Idle;
        drop(inner);
        self.controls.set_submit_enabled(true);
    }
}

impl<C: SessionClient + 'static> RoundController<C> {
    pub fn new(client: Arc<C>, ports: RoundPorts) -> Self {
        Self {
            client,
            ports,
            inner: Mutex::new(Inner {
                state: ControllerState::Idle,
                session: None,
                transcript: Transcript::empty(),
            }),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.lock().state
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.lock().session.clone()
    }

    pub fn transcript(&self) -> Transcript {
        self.lock().transcript.clone()
    }

    /// Startup entry point; the host calls this once before enabling input.
    ///
    /// Restores the stored session if the backend still knows it,
    /// otherwise replaces it with a fresh one.
    pub async fn initialize(&self) -> InitOutcome {
        let Some(_busy) = self.begin(ControllerState::Restoring) else {
            return InitOutcome::Ignored;
        };

        let Some(stored) = self.ports.store.get() else {
            info!("No stored session, creating a new one");
            self.forget_session();
            return self.create_session().await;
        };

        match self.client.fetch_history(&stored).await {
            Ok(transcript) => {
                info!(
                    "Restored session {} ({} messages)",
                    stored,
                    transcript.len()
                );
                self.install_session(Some(stored.clone()));
                self.install_transcript(transcript);
                InitOutcome::Restored(stored)
            }
            Err(e) => {
                if e.is_not_found() {
                    info!("Stored session {} no longer exists on the backend", stored);
                } else {
                    warn!("Could not restore session {}: {}", stored, e);
                }
                self.ports.store.clear();
                self.forget_session();
                self.create_session().await
            }
        }
    }

    /// Replace the current session with a new one (the "new session" control)
    pub async fn start_new_session(&self) -> InitOutcome {
        let Some(_busy) = self.begin(ControllerState::Restoring) else {
            return InitOutcome::Ignored;
        };
        self.create_session().await
    }

    /// Submit the prompt currently in the prompt field.
    ///
    /// On success the full returned transcript replaces the displayed one
    /// and the prompt field is cleared. On failure the user is notified
    /// and the prompt is left as typed.
    pub async fn submit(&self) -> SubmitOutcome {
        let prompt = {
            let inner = self.lock();
            if inner.state != ControllerState::Idle {
                debug!("Submission ignored while {:?}", inner.state);
                return SubmitOutcome::Ignored;
            }
            drop(inner);

            match Prompt::parse(&self.ports.controls.prompt()) {
                Ok(prompt) => prompt,
                Err(_) => {
                    self.ports.notifier.notify(messages::EMPTY_PROMPT);
                    return SubmitOutcome::Rejected;
                }
            }
        };

        let Some(_busy) = self.begin(ControllerState::Submitting) else {
            return SubmitOutcome::Ignored;
        };

        let session = match self.session_id() {
            Some(session) => session,
            None => match self.create_session().await {
                InitOutcome::Created(session) => session,
                _ => return SubmitOutcome::Failed,
            },
        };

        let request = RoundRequest::new(
            session,
            prompt,
            self.ports.controls.mode(),
            &self.ports.controls.agent_toggles(),
        );

        info!(
            "Running round in {} mode with {} agent(s)",
            request.mode,
            request.enabled_agents.len()
        );

        match self.client.run_round(&request).await {
            Ok(transcript) => {
                debug!("Round returned {} messages", transcript.len());
                self.install_transcript(transcript);
                self.ports.controls.clear_prompt();
                SubmitOutcome::Completed
            }
            Err(e) => {
                warn!("Round failed: {}", e);
                self.fail(&e.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// The "create new session" branch shared by every transition
    async fn create_session(&self) -> InitOutcome {
        match self.client.create_session().await {
            Ok(session) => {
                info!("Started session {}", session);
                self.ports.store.set(&session);
                self.install_session(Some(session.clone()));
                self.install_transcript(Transcript::empty());
                self.ports.notifier.notify(messages::NEW_SESSION);
                InitOutcome::Created(session)
            }
            Err(e) => {
                warn!("Could not create session: {}", e);
                self.fail(messages::CONNECTION_ERROR);
                InitOutcome::Failed
            }
        }
    }

    /// Enter a busy state if idle; `None` if another transition owns it.
    fn begin(&self, state: ControllerState) -> Option<BusyGuard<'_>> {
        let mut inner = self.lock();
        if inner.state != ControllerState::Idle {
            debug!("Cannot enter {:?} while {:?}", state, inner.state);
            return None;
        }
        debug!("Idle -> {:?}", state);
        inner.state = state;
        drop(inner);

        self.ports.controls.set_submit_enabled(false);
        Some(BusyGuard {
            inner: &self.inner,
            controls: self.ports.controls.as_ref(),
        })
    }

    fn fail(&self, message: &str) {
        {
            let mut inner = self.lock();
            debug!("{:?} -> Error", inner.state);
            inner.state = ControllerState::Error;
        }
        self.ports.notifier.notify(message);
    }

    /// Drop the in-memory session and whatever transcript belonged to it
    fn forget_session(&self) {
        if self.lock().session.is_some() {
            self.install_session(None);
            self.install_transcript(Transcript::empty());
        }
    }

    fn install_session(&self, session: Option<SessionId>) {
        self.lock().session = session;
    }

    /// Redraw the transcript, then the session tag on top of the fresh view
    fn install_transcript(&self, transcript: Transcript) {
        let nodes = TranscriptRenderer::new(self.ports.markup.as_ref()).render(&transcript);
        self.ports.view.replace(&nodes);
        self.ports.view.scroll_to_latest();

        let session = {
            let mut inner = self.lock();
            inner.transcript = transcript;
            inner.session.clone()
        };
        self.ports.controls.show_session(session.as_ref());
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
