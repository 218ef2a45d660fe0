//! Scoped auth subscription.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::auth::{AuthProvider, AuthUser};

/// Delivers auth changes to a callback until dropped.
#[derive(Debug)]
pub struct AuthSubscription {
    task: JoinHandle<()>,
}

impl AuthSubscription {
    /// Subscribe to `provider`. The current value is delivered before this
    /// returns; changes are delivered from a background task, so this must be
    /// called within a tokio runtime.
    pub fn subscribe<F>(provider: &dyn AuthProvider, on_change: F) -> Self
    where
        F: FnMut(Option<AuthUser>) + Send + 'static,
    {
        Self::from_receiver(provider.subscribe(), on_change)
    }

    pub fn from_receiver<F>(mut rx: watch::Receiver<Option<AuthUser>>, mut on_change: F) -> Self
    where
        F: FnMut(Option<AuthUser>) + Send + 'static,
    {
        let current = rx.borrow_and_update().clone();
        on_change(current);

        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let current = rx.borrow_and_update().clone();
                on_change(current);
            }
            tracing::debug!("Auth provider closed");
        });
        Self { task }
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    /// Explicit teardown; equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
