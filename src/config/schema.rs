//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the watch page.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Primary and secondary API base URLs.
    pub endpoints: EndpointConfig,

    /// Session-expiry behaviour.
    pub session: SessionConfig,

    /// Where the key/value store lives.
    pub storage: StorageConfig,

    /// HTTP client timeouts.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// API endpoints. The primary is always tried first.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL tried first (usually a local development backend).
    pub primary_base: String,

    /// Base URL tried when the primary fails.
    pub secondary_base: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            primary_base: "http://localhost:5000/api".to_string(),
            secondary_base: "https://fried-fish.vercel.app/api".to_string(),
        }
    }
}

/// Session-expiry configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Delay between showing the notice and redirecting, in milliseconds.
    pub redirect_delay_ms: u64,

    /// Route navigated to once the session expired.
    pub home_route: String,
}

impl SessionConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: 3000,
            home_route: "/".to_string(),
        }
    }
}

/// Persistent key/value storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the store.
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "watch-page-storage.json".to_string(),
        }
    }
}

/// Timeout configuration for API requests.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 10,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
