//! Wire types for the backend's JSON bodies

use agentroom_domain::Message;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct NewSessionResponse {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Error body. FastAPI-style backends send a string for handled errors
/// and a list of objects for validation failures.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parse `body` and pull out a human-readable detail, if any
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
