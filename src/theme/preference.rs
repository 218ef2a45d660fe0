//! Persisted theme preference.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError, DARK_MODE_KEY, NEON_COLOR_KEY};
use crate::theme::accent::AccentColor;

/// Dark mode flag plus accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemePreference {
    pub dark_mode: bool,
    pub accent: AccentColor,
}

impl ThemePreference {
    /// Read the preference. Only the exact string `"true"` enables dark mode;
    /// a missing or unknown accent falls back to blue.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let dark_mode = store.get(DARK_MODE_KEY).as_deref() == Some("true");
        let accent = match store.get(NEON_COLOR_KEY) {
            Some(name) => name.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored accent color");
                AccentColor::default()
            }),
            None => AccentColor::default(),
        };
        Self { dark_mode, accent }
    }

    pub fn save_dark_mode(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(DARK_MODE_KEY, if self.dark_mode { "true" } else { "false" })
    }

    pub fn save_accent(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(NEON_COLOR_KEY, self.accent.as_str())
    }

    /// Flip dark mode, returning the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_empty_store_defaults() {
        let pref = ThemePreference::load(&MemoryStore::new());
        assert_eq!(pref, ThemePreference { dark_mode: false, accent: AccentColor::Blue });
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::default();
        pref.toggle_dark_mode();
        pref.accent = AccentColor::Red;
        pref.save_dark_mode(&store).unwrap();
        pref.save_accent(&store).unwrap();

        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(NEON_COLOR_KEY).as_deref(), Some("red"));
        assert_eq!(ThemePreference::load(&store), pref);
    }

    #[test]
    fn test_unrecognised_values_fall_back() {
        let store =
            MemoryStore::with_entries([(DARK_MODE_KEY, "TRUE"), (NEON_COLOR_KEY, "orange")]);
        let pref = ThemePreference::load(&store);
        assert!(!pref.dark_mode);
        assert_eq!(pref.accent, AccentColor::Blue);
    }
}
