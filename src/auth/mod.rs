//! Authentication state notifications.
//!
//! # Data Flow
//! ```text
//! AuthProvider (external: sign-in SDK, CLI flag, test harness)
//!     → watch channel of Option<AuthUser>
//!     → AuthSubscription listener task
//!     → page callback (fetch profile / clear profile)
//! ```
//!
//! # Design Decisions
//! - The subscription is a guard; dropping it stops delivery
//! - The current value is delivered synchronously at subscribe time, then
//!   every change from a listener task

pub mod subscription;

use std::sync::Arc;
use tokio::sync::watch;

use crate::models::UserId;

pub use subscription::AuthSubscription;

/// The signed-in user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: UserId,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: UserId(uid.into()) }
    }
}

/// Source of current-user notifications.
pub trait AuthProvider: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<Option<AuthUser>>;
}

/// Watch-channel provider that embedders drive directly.
#[derive(Debug, Clone)]
pub struct AuthHandle {
    tx: Arc<watch::Sender<Option<AuthUser>>>,
}

impl AuthHandle {
    pub fn new(initial: Option<AuthUser>) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn signed_out() -> Self {
        Self::new(None)
    }

    pub fn sign_in(&self, user: AuthUser) {
        tracing::debug!(uid = %user.uid, "Auth state: signed in");
        self.tx.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        tracing::debug!("Auth state: signed out");
        self.tx.send_replace(None);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AuthHandle {
    fn default() -> Self {
        Self::signed_out()
    }
}

impl AuthProvider for AuthHandle {
    fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.tx.subscribe()
    }
}
