//! Identifiers and records exchanged with the video API.
//!
//! Records are kept as opaque JSON: the backend decides their shape and the
//! page only reads a handful of well-known fields for display.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Bearer credential read from storage. Absent means unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential(Option<String>);

impl Credential {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Token as sent in the `Authorization: Bearer` header. An absent
    /// credential is passed through as an empty token.
    pub fn bearer_token(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self(Some(token.to_string()))
    }
}

/// Opaque user identifier issued by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque video identifier taken from the page route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    /// Route parameters can arrive empty; treat those as missing. Anything
    /// else is passed through untouched.
    pub fn from_route(param: Option<&str>) -> Option<Self> {
        param
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// User profile as returned by `GET /profile/{uid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub Value);

impl UserProfile {
    /// Best-effort display name for the header.
    pub fn display_name(&self) -> Option<&str> {
        ["displayName", "name", "username", "email"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_str))
    }
}

/// Video record as returned by `GET /videos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoRecord(pub Value);

impl VideoRecord {
    /// The record's own id. Numeric ids are rendered as strings.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id").or_else(|| self.0.get("_id"))? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }
}

/// Ordered featured videos as returned by `GET /videos/`.
pub type VideoList = Vec<VideoRecord>;
