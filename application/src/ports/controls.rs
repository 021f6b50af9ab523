//! Round controls port
//!
//! The user-facing controls the round controller consumes: prompt field,
//! mode selector, agent checkboxes, submit control and session tag.

use agentroom_domain::{AgentToggles, Mode, SessionId};

/// Read access to the host UI's controls, plus the few write-backs the
/// controller is allowed to perform.
///
/// The controller reads values only at the moments it needs them
/// (submission time). It never changes the mode or the agent toggles.
pub trait RoundControls: Send + Sync {
    /// Current raw content of the prompt field
    fn prompt(&self) -> String;

    /// Currently selected mode
    fn mode(&self) -> Mode;

    /// Current state of the agent checkboxes
    fn agent_toggles(&self) -> AgentToggles;

    /// Empty the prompt field after a successful round
    fn clear_prompt(&self);

    /// Enable or disable the submit control
    fn set_submit_enabled(&self, enabled: bool);

    /// Display the active session identifier (`None` when there is none)
    fn show_session(&self, session: Option<&SessionId>);
}
