//! Dual-endpoint fetch subsystem.
//!
//! # Data Flow
//! ```text
//! VideoApi (api.rs): profile / video / featured list
//!     → ResilientFetcher (client.rs)
//!         → GET primary_base + path
//!             2xx + JSON → done
//!             401        → SessionMonitor::expire, abort
//!             otherwise  → GET secondary_base + path
//!                              2xx + JSON → done
//!                              401        → SessionMonitor::expire, abort
//!                              otherwise  → FetchError::Exhausted (logged)
//! ```
//!
//! # Design Decisions
//! - One fallback hop, fixed order, no backoff and no health tracking
//! - 401 is never retried and is handled the same for every resource
//! - A body that is not valid JSON counts as a failed attempt
//! - Each invocation gets a request id shared by both attempts

pub mod api;
pub mod client;
pub mod error;

use std::fmt;

pub use api::VideoApi;
pub use client::ResilientFetcher;
pub use error::{AttemptError, FetchError};

/// Which configured base URL an attempt went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Primary,
    Secondary,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Primary => "primary",
            Endpoint::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
