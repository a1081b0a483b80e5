//! Process-wide observable theme state.
//!
//! The source application had every component observe document-root class
//! changes on its own. Here the preference lives in one store backed by a
//! watch channel: components subscribe once and follow updates, and there
//! is exactly one writer path for theme changes.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// User-selected theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Always render the light theme.
    Light,
    /// Always render the dark theme.
    Dark,
    /// Follow the system preference.
    System,
}

impl ThemeMode {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolves the preference to a concrete theme, using the system
    /// preference supplied at resolution time.
    #[must_use]
    pub const fn resolve(self, system_preference: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System => system_preference,
        }
    }
}

impl TryFrom<&str> for ThemeMode {
    type Error = ParseThemeModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ParseThemeModeError(value.to_owned())),
        }
    }
}

/// Error returned while parsing theme modes from persisted settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme mode: {0}")]
pub struct ParseThemeModeError(pub String);

/// Concrete theme applied to the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Single observable store for the current theme preference.
///
/// Cloning the store yields another handle to the same state; every
/// subscriber sees every change regardless of which handle published it.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    sender: Arc<watch::Sender<ThemeMode>>,
}

impl ThemeStore {
    /// Creates a store with the given initial preference.
    #[must_use]
    pub fn new(initial: ThemeMode) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Returns the current preference.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        *self.sender.borrow()
    }

    /// Publishes a new preference to every subscriber.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.sender.send_replace(mode);
    }

    /// Flips to the explicit opposite of the currently rendered theme and
    /// returns the new preference. A `System` preference resolves first,
    /// so toggling always lands on an explicit mode.
    #[must_use = "the new preference is also published to subscribers"]
    pub fn toggle(&self, system_preference: Theme) -> ThemeMode {
        let next = match self.mode().resolve(system_preference).opposite() {
            Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
        };
        self.set_mode(next);
        next
    }

    /// Returns a receiver that observes every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.sender.subscribe()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeMode::System)
    }
}
