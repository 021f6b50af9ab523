//! reqwest-based [`SessionClient`] implementation

use super::dto::{ErrorBody, MessagesResponse, NewSessionResponse};
use agentroom_application::{ClientError, SessionClient};
use agentroom_domain::{RoundRequest, SessionId, Transcript};
use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("agentroom/", env!("CARGO_PKG_VERSION"));

/// Talks to the deliberation backend over JSON/HTTP.
///
/// No timeout is configured: a round can take as long as the agents need,
/// and the transport's own limits apply.
#[derive(Debug, Clone)]
pub struct HttpSessionClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSessionClient {
    /// Create a client for the backend at `base_url` (e.g. `http://127.0.0.1:8000`)
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Transport(format!("Invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Transport(format!(
                "Invalid base URL {}: not a hierarchical URL",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::Transport("Base URL cannot hold a path".to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Map a non-success response into a [`ClientError::Server`]
    async fn server_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let detail = ErrorBody::detail_from(&body);
        warn!("Backend returned HTTP {}: {:?}", status, detail);
        ClientError::Server { status, detail }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    async fn create_session(&self) -> Result<SessionId, ClientError> {
        let url = self.endpoint(&["api", "new_session"])?;
        debug!("POST {}", url);

        let response = self.client.post(url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let body: NewSessionResponse = Self::decode(response).await?;
        SessionId::new(body.session_id).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn fetch_history(&self, session: &SessionId) -> Result<Transcript, ClientError> {
        let url = self.endpoint(&["api", "history", session.as_str()])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(transport)?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(session.to_string())),
            status if status.is_success() => {
                let body: MessagesResponse = Self::decode(response).await?;
                Ok(Transcript::new(body.messages))
            }
            _ => Err(Self::server_error(response).await),
        }
    }

    async fn run_round(&self, request: &RoundRequest) -> Result<Transcript, ClientError> {
        let url = self.endpoint(&["api", "run_round"])?;
        debug!("POST {} (session {})", url, request.session_id);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let body: MessagesResponse = Self::decode(response).await?;
        Ok(Transcript::new(body.messages))
    }
}
