//! Resilient JSON fetcher with primary/secondary fallback.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::{EndpointConfig, TimeoutConfig};
use crate::fetch::error::{AttemptError, FetchError, FetchResult};
use crate::fetch::Endpoint;
use crate::models::Credential;
use crate::observability::metrics;
use crate::session::SessionMonitor;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// GETs JSON from the primary base URL, falling back once to the secondary.
#[derive(Clone)]
pub struct ResilientFetcher {
    client: Client,
    primary_base: String,
    secondary_base: String,
    session: Arc<SessionMonitor>,
}

impl ResilientFetcher {
    /// Create a fetcher with a client honouring the configured timeouts.
    pub fn new(
        endpoints: &EndpointConfig,
        timeouts: &TimeoutConfig,
        session: Arc<SessionMonitor>,
    ) -> FetchResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;
        Ok(Self::with_client(client, endpoints, session))
    }

    pub fn with_client(
        client: Client,
        endpoints: &EndpointConfig,
        session: Arc<SessionMonitor>,
    ) -> Self {
        Self {
            client,
            primary_base: endpoints.primary_base.trim_end_matches('/').to_string(),
            secondary_base: endpoints.secondary_base.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Full URL for `path` (which starts with `/`) on the given endpoint.
    pub fn url_for(&self, endpoint: Endpoint, path: &str) -> String {
        let base = match endpoint {
            Endpoint::Primary => &self.primary_base,
            Endpoint::Secondary => &self.secondary_base,
        };
        format!("{}{}", base, path)
    }

    pub fn session(&self) -> &Arc<SessionMonitor> {
        &self.session
    }

    /// Fetch and decode `path`.
    ///
    /// A 401 from either endpoint starts the session-expiry workflow and
    /// ends the call; the secondary is only tried after the primary failed
    /// for any other reason.
    pub async fn get_json<T>(&self, path: &str, credential: &Credential) -> FetchResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("fetch", request_id = %request_id, path = %path);

        async move {
            let primary = self.attempt(Endpoint::Primary, path, credential, request_id).await;
            let primary_error = match primary {
                Ok(value) => return Ok(value),
                Err(AttemptError::Unauthorized { .. }) => {
                    return Err(self.session_expired(Endpoint::Primary));
                }
                Err(e) => e,
            };

            tracing::warn!(error = %primary_error, "Primary endpoint failed, trying secondary");
            metrics::record_fallback();

            match self.attempt(Endpoint::Secondary, path, credential, request_id).await {
                Ok(value) => Ok(value),
                Err(AttemptError::Unauthorized { .. }) => {
                    Err(self.session_expired(Endpoint::Secondary))
                }
                Err(secondary_error) => {
                    tracing::error!(
                        primary = %primary_error,
                        secondary = %secondary_error,
                        "Both endpoints failed"
                    );
                    Err(FetchError::Exhausted {
                        primary: primary_error,
                        secondary: secondary_error,
                    })
                }
            }
        }
        .instrument(span)
        .await
    }

    fn session_expired(&self, endpoint: Endpoint) -> FetchError {
        tracing::warn!(endpoint = %endpoint, "Credential rejected");
        self.session.expire();
        FetchError::SessionExpired { endpoint }
    }

    async fn attempt<T>(
        &self,
        endpoint: Endpoint,
        path: &str,
        credential: &Credential,
        request_id: Uuid,
    ) -> Result<T, AttemptError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(endpoint, path);
        tracing::debug!(endpoint = %endpoint, url = %url, "Sending request");

        let result = self.send(&url, credential, request_id).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.outcome(),
        };
        metrics::record_fetch_attempt(endpoint, outcome);
        result
    }

    async fn send<T>(
        &self,
        url: &str,
        credential: &Credential,
        request_id: Uuid,
    ) -> Result<T, AttemptError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .bearer_auth(credential.bearer_token())
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(|source| AttemptError::Transport { url: url.to_string(), source })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AttemptError::Unauthorized { url: url.to_string() });
        }
        if !status.is_success() {
            return Err(AttemptError::Status { url: url.to_string(), status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| AttemptError::Transport { url: url.to_string(), source })?;

        serde_json::from_slice(&body).map_err(|source| AttemptError::Malformed {
            url: url.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for ResilientFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientFetcher")
            .field("primary_base", &self.primary_base)
            .field("secondary_base", &self.secondary_base)
            .finish()
    }
}
