//! Agent identifiers and the enable/disable toggle set

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Name of a backend participant (e.g. `BioExpert`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for AgentId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One checkbox in the agent toggle set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentToggle {
    pub agent: AgentId,
    pub enabled: bool,
}

/// The agents offered to the user, each either checked or not.
///
/// Owned by the hosting UI. Order is the display order and is the order
/// in which enabled agents are reported; duplicate names are collapsed
/// (first occurrence wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentToggles {
    toggles: Vec<AgentToggle>,
}

impl AgentToggles {
    /// Roster shipped with the deliberation backend
    pub const DEFAULT_ROSTER: [&'static str; 4] =
        ["BioExpert", "AIExpert", "Reviewer", "GrantsWriter"];

    /// All agents in `roster`, all enabled
    pub fn new<I, A>(roster: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AgentId>,
    {
        Self::from_pairs(roster.into_iter().map(|a| (a, true)))
    }

    pub fn from_pairs<I, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, bool)>,
        A: Into<AgentId>,
    {
        let mut toggles: Vec<AgentToggle> = Vec::new();
        for (agent, enabled) in pairs {
            let agent = agent.into();
            if toggles.iter().any(|t| t.agent == agent) {
                continue;
            }
            toggles.push(AgentToggle { agent, enabled });
        }
        Self { toggles }
    }

    /// Check or uncheck one agent
    pub fn set(&mut self, agent: &str, enabled: bool) -> Result<(), DomainError> {
        let toggle = self
            .toggles
            .iter_mut()
            .find(|t| t.agent.as_str() == agent)
            .ok_or_else(|| DomainError::UnknownAgent(agent.to_string()))?;
        toggle.enabled = enabled;
        Ok(())
    }

    /// Restrict the checked agents to `enabled`; agents not named are unchecked.
    pub fn retain_enabled<S: AsRef<str>>(&mut self, enabled: &[S]) {
        for toggle in &mut self.toggles {
            toggle.enabled = enabled.iter().any(|e| e.as_ref() == toggle.agent.as_str());
        }
    }

    /// Exactly the checked agents, in display order
    pub fn enabled(&self) -> Vec<AgentId> {
        self.toggles
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.agent.clone())
            .collect()
    }

    pub fn is_enabled(&self, agent: &str) -> bool {
        self.toggles
            .iter()
            .any(|t| t.enabled && t.agent.as_str() == agent)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentToggle> {
        self.toggles.iter()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

impl Default for AgentToggles {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROSTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_all_enabled() {
        let toggles = AgentToggles::default();
        assert_eq!(toggles.len(), 4);
        assert_eq!(
            toggles.enabled(),
            vec![
                AgentId::new("BioExpert"),
                AgentId::new("AIExpert"),
                AgentId::new("Reviewer"),
                AgentId::new("GrantsWriter"),
            ]
        );
    }

    #[test]
    fn test_enabled_matches_checked_for_every_combination() {
        let roster = ["Planner", "Coder", "Critic"];
        for mask in 0u8..8 {
            let pairs: Vec<_> = roster
                .iter()
                .enumerate()
                .map(|(i, name)| (*name, mask & (1 << i) != 0))
                .collect();
            let toggles = AgentToggles::from_pairs(pairs.clone());

            let expected: Vec<AgentId> = pairs
                .iter()
                .filter(|(_, on)| *on)
                .map(|(name, _)| AgentId::new(*name))
                .collect();
            assert_eq!(toggles.enabled(), expected, "mask {mask:03b}");
        }
    }

    #[test]
    fn test_duplicates_collapsed() {
        let toggles = AgentToggles::from_pairs([("Coder", true), ("Coder", false)]);
        assert_eq!(toggles.len(), 1);
        assert!(toggles.is_enabled("Coder"));
    }

    #[test]
    fn test_set_unknown_agent() {
        let mut toggles = AgentToggles::new(["Planner"]);
        assert_eq!(
            toggles.set("Ghost", true),
            Err(DomainError::UnknownAgent("Ghost".to_string()))
        );
    }

    #[test]
    fn test_set_and_retain() {
        let mut toggles = AgentToggles::new(["Planner", "Coder", "Critic"]);
        toggles.set("Coder", false).unwrap();
        assert!(!toggles.is_enabled("Coder"));

        toggles.retain_enabled(&["Critic"]);
        assert_eq!(toggles.enabled(), vec![AgentId::new("Critic")]);
    }
}
