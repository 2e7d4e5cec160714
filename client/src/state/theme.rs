//! Light/dark display preference.
//!
//! The persisted value is the literal string `light` or `dark` under a single
//! storage key. [`ThemeStore`] is the only reader/writer of that key; the
//! document side is abstracted as a [`ThemeTarget`] so the round-trip and
//! involution properties can be checked without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown in the toggle knob.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f}",
            Self::Dark => "\u{1f319}",
        }
    }

    /// Accessible label for the toggle while `self` is applied.
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.toggled())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Whatever consumes the applied theme (the `<html>` attribute plus the
/// toggle's icon/label in the browser).
pub trait ThemeTarget {
    /// Currently applied theme, if any has been applied.
    fn applied(&self) -> Option<Theme>;

    /// Apply `theme` and sync any indicator. Must be idempotent.
    fn apply(&mut self, theme: Theme);
}

/// Owner of the persisted theme key.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    key: String,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Persisted preference; `light` when unset, unreadable, or unrecognized.
    pub fn get_preference(&self) -> Theme {
        match self.storage.get(&self.key) {
            Some(raw) => raw.parse().unwrap_or_default(),
            None => Theme::default(),
        }
    }

    /// Apply `theme` to `target` without persisting it.
    pub fn apply_preference(&self, target: &mut impl ThemeTarget, theme: Theme) {
        target.apply(theme);
    }

    /// Flip the applied theme, apply it, and persist it. Returns the new theme.
    ///
    /// A failed write is logged; the applied theme still changes for this page.
    pub fn toggle(&self, target: &mut impl ThemeTarget) -> Theme {
        let current = target.applied().unwrap_or_else(|| self.get_preference());
        let next = current.toggled();
        self.apply_preference(target, next);
        if let Err(err) = self.storage.set(&self.key, next.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        next
    }
}
