//! Route navigation.

use std::sync::{Arc, Mutex};

/// Performs client-side navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator that records every requested route. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn count(&self) -> usize {
        self.routes.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route = %route, "Navigating");
        self.routes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(route.to_string());
    }
}
