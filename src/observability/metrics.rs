//! Metrics collection.
//!
//! # Metrics
//! - `watch_page_fetch_attempts_total` (counter): attempts by endpoint, outcome
//! - `watch_page_fetch_fallbacks_total` (counter): primary failures that fell back
//! - `watch_page_session_expired_total` (counter): expiry transitions

use crate::fetch::Endpoint;

/// Record one attempt against an endpoint.
pub fn record_fetch_attempt(endpoint: Endpoint, outcome: &'static str) {
    ::metrics::counter!(
        "watch_page_fetch_attempts_total",
        "endpoint" => endpoint.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_fallback() {
    ::metrics::counter!("watch_page_fetch_fallbacks_total").increment(1);
}

pub fn record_session_expired() {
    ::metrics::counter!("watch_page_session_expired_total").increment(1);
}
