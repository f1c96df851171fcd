// File: crates/skyai-chart/src/theme.rs
// Summary: Light/Dark color token sets and the persisted theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::Color;
use crate::error::StorageError;

/// Storage key holding the preferred mode (`"light"` or `"dark"`).
pub const THEME_STORAGE_KEY: &str = "skyai-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode `{other}`")),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable color tokens handed to renderers. Renderers never look colors up globally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background_main: Color,
    pub background_container: Color,
    pub background_card: Color,
    pub background_nested: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub button_active: Color,
    pub button_inactive: Color,
    pub success: Color,
    pub warning: Color,
    /// Axis label color for points that are not emphasized.
    pub axis_label: Color,
    /// Fill and label color of emphasized points.
    pub highlight: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background_main: Color::rgb(0xf8, 0xf8, 0xf8),
            background_container: Color::rgb(0xff, 0xff, 0xff),
            background_card: Color::rgb(0xff, 0xff, 0xff),
            background_nested: Color::rgb(0xf8, 0xf8, 0xf8),
            text_primary: Color::rgb(0x25, 0x26, 0x17),
            text_secondary: Color::rgb(0x80, 0x80, 0x80),
            border: Color::rgb(0xe5, 0xe5, 0xe5),
            button_active: Color::rgb(0x00, 0xaa, 0x00),
            button_inactive: Color::rgb(0xf0, 0xf0, 0xf0),
            success: Color::rgb(0x00, 0xaa, 0x00),
            warning: Color::rgb(0xff, 0x00, 0x00),
            axis_label: Color::rgb(0x88, 0x88, 0x88),
            highlight: Color::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background_main: Color::rgb(0xe5, 0xe5, 0xe5),
            background_container: Color::rgb(0x1a, 0x1a, 0x1a),
            background_card: Color::rgb(0x2a, 0x2a, 0x2a),
            background_nested: Color::rgb(0x33, 0x33, 0x33),
            text_primary: Color::rgb(0xff, 0xff, 0xff),
            text_secondary: Color::rgb(0x88, 0x88, 0x88),
            border: Color::rgb(0x44, 0x44, 0x44),
            button_active: Color::rgb(0x00, 0xaa, 0x00),
            button_inactive: Color::TRANSPARENT,
            success: Color::rgb(0x00, 0xff, 0x00),
            warning: Color::rgb(0xff, 0x6b, 0x6b),
            axis_label: Color::rgb(0x88, 0x88, 0x88),
            highlight: Color::WHITE,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn name(&self) -> &'static str { self.mode.as_str() }

    /// `(css variable, value)` pairs, for shells that style with custom properties.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--color-background-main", self.background_main.to_css()),
            ("--color-background-container", self.background_container.to_css()),
            ("--color-background-card", self.background_card.to_css()),
            ("--color-background-nested", self.background_nested.to_css()),
            ("--color-text-primary", self.text_primary.to_css()),
            ("--color-text-secondary", self.text_secondary.to_css()),
            ("--color-border", self.border.to_css()),
            ("--color-button-active", self.button_active.to_css()),
            ("--color-button-inactive", self.button_inactive.to_css()),
            ("--color-success", self.success.to_css()),
            ("--color-warning", self.warning.to_css()),
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Key/value port the theme preference is persisted through.
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: ThemeStorage + ?Sized> ThemeStorage for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> { (**self).get(key) }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> { (**self).set(key, value) }
}

/// Current theme mode backed by a storage port.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    mode: ThemeMode,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Read the stored preference. Missing, unreadable or unknown values yield light.
    pub fn load(storage: S) -> Self {
        let mode = match storage.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(value = %raw, "ignoring stored theme: {e}");
                ThemeMode::default()
            }),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                warn!("theme storage unreadable, using default: {e}");
                ThemeMode::default()
            }
        };
        debug!(mode = %mode, "theme loaded");
        Self { storage, mode }
    }

    pub fn mode(&self) -> ThemeMode { self.mode }
    pub fn theme(&self) -> Theme { Theme::for_mode(self.mode) }
    pub fn storage(&self) -> &S { &self.storage }
    pub fn into_storage(self) -> S { self.storage }

    /// Switch to `mode` and persist it.
    pub fn set(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.storage.set(THEME_STORAGE_KEY, mode.as_str())?;
        self.mode = mode;
        debug!(mode = %mode, "theme stored");
        Ok(())
    }

    /// Flip light/dark, persist, and return the new mode.
    pub fn toggle(&mut self) -> Result<ThemeMode, StorageError> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }
}
