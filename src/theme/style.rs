//! Applying the theme to the document root.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use crate::theme::accent::hex_to_rgb;
use crate::theme::preference::ThemePreference;

pub const DARK_CLASS: &str = "dark";
pub const NEON_PRIMARY_VAR: &str = "--neon-primary";
pub const NEON_SECONDARY_VAR: &str = "--neon-secondary";
pub const NEON_PRIMARY_RGB_VAR: &str = "--neon-primary-rgb";

/// Document root styling surface.
pub trait StyleSink: Send + Sync {
    fn set_property(&self, name: &str, value: &str);

    fn remove_property(&self, name: &str);

    fn toggle_class(&self, class: &str, enabled: bool);
}

/// Apply the full preference: `dark` class and the accent variables.
pub fn apply_theme(sink: &dyn StyleSink, pref: &ThemePreference) {
    sink.toggle_class(DARK_CLASS, pref.dark_mode);
    sink.set_property(NEON_PRIMARY_VAR, pref.accent.primary_hex());
    sink.set_property(NEON_SECONDARY_VAR, pref.accent.secondary_hex());
    match hex_to_rgb(pref.accent.primary_hex()) {
        Some(rgb) => sink.set_property(NEON_PRIMARY_RGB_VAR, &rgb),
        None => sink.remove_property(NEON_PRIMARY_RGB_VAR),
    }
}

#[derive(Debug, Default)]
struct Sheet {
    properties: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// In-memory document root. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    inner: Arc<RwLock<Sheet>>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.read(|sheet| sheet.properties.get(name).cloned())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.read(|sheet| sheet.classes.contains(class))
    }

    pub fn properties(&self) -> BTreeMap<String, String> {
        self.read(|sheet| sheet.properties.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&Sheet) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut Sheet)) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl StyleSink for StyleSheet {
    fn set_property(&self, name: &str, value: &str) {
        self.write(|sheet| {
            sheet.properties.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_property(&self, name: &str) {
        self.write(|sheet| {
            sheet.properties.remove(name);
        });
    }

    fn toggle_class(&self, class: &str, enabled: bool) {
        self.write(|sheet| {
            if enabled {
                sheet.classes.insert(class.to_string());
            } else {
                sheet.classes.remove(class);
            }
        });
    }
}
