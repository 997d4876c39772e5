//! Theme Store
//!
//! Light/dark/system preference persisted under `casino_theme`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Current preference plus the platform signal sampled at startup.
///
/// `System` resolves against that sample; later platform changes are not
/// tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub system_prefers_dark: bool,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        match self.preference {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::System => self.system_prefers_dark,
        }
    }

    /// Opposite of what is currently shown. Always lands on an explicit
    /// light or dark, so `System` leaves the cycle after one toggle.
    pub fn toggled(self) -> Self {
        let preference = if self.is_dark() { ThemePreference::Light } else { ThemePreference::Dark };
        Self { preference, ..self }
    }
}

/// Theme preference with write-through persistence
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    storage: S,
    state: ThemeState,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the saved preference, or derive one from the platform signal.
    pub fn load(storage: S, system_prefers_dark: bool) -> Self {
        let saved = storage.get(THEME_KEY).and_then(|raw| match raw.parse() {
            Ok(preference) => Some(preference),
            Err(UnknownTheme(value)) => {
                warn!(%value, "ignoring unknown stored theme");
                None
            }
        });
        let preference = saved.unwrap_or(if system_prefers_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        });

        Self {
            storage,
            state: ThemeState { preference, system_prefers_dark },
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn preference(&self) -> ThemePreference {
        self.state.preference
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark()
    }

    pub fn toggle(&mut self) -> ThemeState {
        let next = self.state.toggled().preference;
        self.set(next)
    }

    pub fn set_light(&mut self) -> ThemeState {
        self.set(ThemePreference::Light)
    }

    pub fn set_dark(&mut self) -> ThemeState {
        self.set(ThemePreference::Dark)
    }

    /// Store `preference`. A failed write is logged; the in-memory value
    /// still changes.
    pub fn set(&mut self, preference: ThemePreference) -> ThemeState {
        self.state.preference = preference;
        if let Err(err) = self.storage.set(THEME_KEY, preference.as_str()) {
            warn!(error = %err, "theme preference not persisted");
        }
        debug!(theme = %preference, "theme changed");
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_saved_preference_wins_over_platform() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "light").unwrap();
        let store = ThemeStore::load(storage, true);
        assert_eq!(store.preference(), ThemePreference::Light);
        assert!(!store.is_dark());
    }

    #[test]
    fn test_missing_preference_follows_platform() {
        assert_eq!(ThemeStore::load(MemoryStore::new(), true).preference(), ThemePreference::Dark);
        assert_eq!(ThemeStore::load(MemoryStore::new(), false).preference(), ThemePreference::Light);
    }

    #[test]
    fn test_garbage_preference_ignored() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeStore::load(storage, false).preference(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_from_dark_and_back() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "dark").unwrap();
        let mut store = ThemeStore::load(storage.clone(), false);

        let state = store.toggle();
        assert!(!state.is_dark());
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));

        let state = store.toggle();
        assert!(state.is_dark());
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_system_resolves_against_startup_sample() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "system").unwrap();
        let mut store = ThemeStore::load(storage.clone(), true);
        assert!(store.is_dark());

        // Toggling leaves system for the opposite explicit value
        store.toggle();
        assert_eq!(store.preference(), ThemePreference::Light);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_explicit_setters_persist() {
        let storage = MemoryStore::new();
        let mut store = ThemeStore::load(storage.clone(), false);
        store.set_dark();
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
        store.set_light();
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
        store.set(ThemePreference::System);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("system"));
        assert!(!store.is_dark());
    }

    #[test]
    fn test_preference_parsing() {
        for preference in ThemePreference::ALL {
            assert_eq!(preference.as_str().parse::<ThemePreference>(), Ok(preference));
        }
        assert!("blue".parse::<ThemePreference>().is_err());
    }
}
