//! Light/dark theme preference.
//!
//! The choice lives under a single localStorage key and is applied as a
//! `data-theme` attribute on `<html>`, which the stylesheet keys off.

use std::fmt;
use std::str::FromStr;

use log::warn;
use web_sys::window;

use crate::config::THEME_STORAGE_KEY;
use crate::scheduler::{Scheduler, TaskHandle};

/// How long the body keeps its colour transition after a toggle.
pub const TRANSITION_MS: u32 = 300;

const BODY_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the toggle button: shows what a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {:?}", other)),
        }
    }
}

/// Key-value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`; every access degrades to a no-op when storage is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl LocalPreferences {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage rejected {}: {:?}", key, e))
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored theme, or light when nothing usable is stored.
pub fn load(store: &impl PreferenceStore) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Flips `current` and persists the result.
pub fn toggle(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(THEME_STORAGE_KEY, next.as_str()) {
        warn!("Failed to persist theme: {}", e);
    }
    next
}

/// Sets `data-theme` on the document element.
pub fn apply(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Gives the body a colour transition for [`TRANSITION_MS`], then clears it
/// so later style changes are not animated.
pub fn flash_transition(scheduler: &impl Scheduler) -> Option<TaskHandle> {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body())?;
    let _ = body.style().set_property("transition", BODY_TRANSITION);
    Some(scheduler.schedule(
        TRANSITION_MS,
        Box::new(move || {
            let _ = body.style().remove_property("transition");
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        let store = MemoryPreferences::default();
        assert_eq!(load(&store), Theme::Light);

        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(load(&store), Theme::Light);

        store.set(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(load(&store), Theme::Dark);
    }

    #[test]
    fn double_toggle_restores_theme_and_stored_value() {
        let store = MemoryPreferences::default();
        store.set(THEME_STORAGE_KEY, "dark").unwrap();
        let original = load(&store);

        let once = toggle(&store, original);
        assert_eq!(once, Theme::Light);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

        let twice = toggle(&store, once);
        assert_eq!(twice, original);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn icon_names_the_target_theme() {
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.icon(), "☀️");
    }
}
