//! Fetch error definitions.

use reqwest::StatusCode;
use thiserror::Error;

use crate::fetch::Endpoint;

/// Why a single attempt against one endpoint failed.
#[derive(Debug, Error)]
pub enum AttemptError {
    /// Network unreachable, DNS, timeout, or body read failure.
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 401 from the endpoint.
    #[error("unauthorized response from {url}")]
    Unauthorized { url: String },

    /// Any other non-2xx status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },

    /// 2xx with a body that does not decode into the expected shape.
    #[error("malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AttemptError {
    /// Outcome label used in metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            AttemptError::Transport { .. } => "transport",
            AttemptError::Unauthorized { .. } => "unauthorized",
            AttemptError::Status { .. } => "status",
            AttemptError::Malformed { .. } => "malformed",
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AttemptError::Status { status, .. } => Some(*status),
            AttemptError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }
}

/// Terminal result of a resilient fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// An endpoint answered 401; the session-expiry workflow was started.
    #[error("session expired ({endpoint} endpoint answered 401)")]
    SessionExpired { endpoint: Endpoint },

    /// Both endpoints failed.
    #[error("all endpoints failed: primary: {primary}; secondary: {secondary}")]
    Exhausted {
        primary: AttemptError,
        secondary: AttemptError,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
