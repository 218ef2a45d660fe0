//! Session-expiry monitor.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::SessionConfig;
use crate::observability::metrics;
use crate::session::navigator::Navigator;
use crate::session::state::{SessionNotice, SessionState};

/// Tracks whether the session expired and schedules the one-shot redirect.
pub struct SessionMonitor {
    state: AtomicU8,
    navigator: Arc<dyn Navigator>,
    home_route: String,
    redirect_delay: Duration,
}

impl SessionMonitor {
    pub fn new(navigator: Arc<dyn Navigator>, config: &SessionConfig) -> Self {
        Self {
            state: AtomicU8::new(SessionState::Active as u8),
            navigator,
            home_route: config.home_route.clone(),
            redirect_delay: config.redirect_delay(),
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::from(self.state.load(Ordering::Acquire))
    }

    pub fn is_expired(&self) -> bool {
        self.state() == SessionState::ExpiredPendingRedirect
    }

    /// The banner to display, if the session expired.
    pub fn notice(&self) -> Option<SessionNotice> {
        self.is_expired().then(SessionNotice::expired)
    }

    /// Handle a 401. Returns true if this call performed the transition;
    /// later calls are no-ops.
    pub fn expire(&self) -> bool {
        let transitioned = self
            .state
            .compare_exchange(
                SessionState::Active as u8,
                SessionState::ExpiredPendingRedirect as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();

        if !transitioned {
            tracing::debug!("Session already expired, redirect pending");
            return false;
        }

        metrics::record_session_expired();
        tracing::warn!(
            home_route = %self.home_route,
            delay_ms = self.redirect_delay.as_millis() as u64,
            "Session expired, scheduling redirect"
        );

        let navigator = self.navigator.clone();
        let route = self.home_route.clone();
        let delay = self.redirect_delay;

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                // Detached: the redirect fires even if the page is torn down.
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    navigator.navigate(&route);
                });
            }
            Err(_) => {
                tracing::warn!("No async runtime available, redirecting immediately");
                navigator.navigate(&route);
            }
        }
        true
    }
}

impl std::fmt::Debug for SessionMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionMonitor")
            .field("state", &self.state())
            .field("home_route", &self.home_route)
            .field("redirect_delay", &self.redirect_delay)
            .finish()
    }
}
