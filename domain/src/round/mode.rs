//! Deliberation mode value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the backend's agents deliberate during a round.
///
/// The backend owns the set of valid modes. The two it ships with are
/// modelled explicitly; anything else is carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// Open discussion (backend default)
    #[default]
    Freestyle,
    /// Agents must back claims with evidence
    Evidence,
    /// Any other backend-defined mode
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Freestyle => "FREESTYLE",
            Mode::Evidence => "EVIDENCE",
            Mode::Other(s) => s,
        }
    }

    /// Modes the client knows by name, for help output
    pub fn known() -> &'static [Mode] {
        &[Mode::Freestyle, Mode::Evidence]
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::EmptyMode);
        }
        Ok(match s.to_ascii_uppercase().as_str() {
            "FREESTYLE" => Mode::Freestyle,
            "EVIDENCE" => Mode::Evidence,
            _ => Mode::Other(s.to_string()),
        })
    }
}

impl TryFrom<String> for Mode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_freestyle() {
        assert_eq!(Mode::default(), Mode::Freestyle);
    }

    #[test]
    fn test_parse_known_case_insensitive() {
        assert_eq!("evidence".parse::<Mode>().unwrap(), Mode::Evidence);
        assert_eq!(" Freestyle ".parse::<Mode>().unwrap(), Mode::Freestyle);
    }

    #[test]
    fn test_parse_other_kept_verbatim() {
        let mode: Mode = "debate".parse().unwrap();
        assert_eq!(mode, Mode::Other("debate".to_string()));
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"debate\"");
    }

    #[test]
    fn test_parse_empty_fails() {
        assert_eq!("  ".parse::<Mode>(), Err(DomainError::EmptyMode));
    }

    #[test]
    fn test_serialize_known_uppercase() {
        assert_eq!(
            serde_json::to_string(&Mode::Evidence).unwrap(),
            "\"EVIDENCE\""
        );
    }
}
