//! Round request entity

use super::agents::{AgentId, AgentToggles};
use super::mode::Mode;
use super::prompt::Prompt;
use crate::session::entities::SessionId;
use serde::{Deserialize, Serialize};

/// Body of one `run_round` call.
///
/// `enabled_agents` is a snapshot of the checked toggles taken when the
/// request is built; later toggle changes do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRequest {
    pub session_id: SessionId,
    pub user_prompt: Prompt,
    pub mode: Mode,
    pub enabled_agents: Vec<AgentId>,
}

impl RoundRequest {
    pub fn new(
        session_id: SessionId,
        user_prompt: Prompt,
        mode: Mode,
        toggles: &AgentToggles,
    ) -> Self {
        Self {
            session_id,
            user_prompt,
            mode,
            enabled_agents: toggles.enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let toggles = AgentToggles::from_pairs([("Planner", true), ("Coder", true), ("Critic", false)]);
        let request = RoundRequest::new(
            SessionId::new("abc123").unwrap(),
            Prompt::parse("Hello").unwrap(),
            "debate".parse().unwrap(),
            &toggles,
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "session_id": "abc123",
                "user_prompt": "Hello",
                "mode": "debate",
                "enabled_agents": ["Planner", "Coder"],
            })
        );
    }

    #[test]
    fn test_snapshot_independent_of_later_toggles() {
        let mut toggles = AgentToggles::new(["Planner", "Coder"]);
        let request = RoundRequest::new(
            SessionId::new("s").unwrap(),
            Prompt::parse("p").unwrap(),
            Mode::Freestyle,
            &toggles,
        );
        toggles.set("Coder", false).unwrap();
        assert_eq!(request.enabled_agents.len(), 2);
    }
}
