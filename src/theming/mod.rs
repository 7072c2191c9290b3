// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming driven by the operating system preference.
//!
//! The preference is never stored: every evaluation reads it fresh from a
//! [`PreferenceSource`], maps it to an [`AppliedTheme`] and writes the result
//! into the [`Document`] through [`apply_theme`].

pub mod controller;
pub mod document;
pub mod preference;

pub use controller::{Lifecycle, ThemeController, Trigger};
pub use document::{Document, Element, ReadyState, ThemeTargets};
pub use preference::{PreferenceSource, PreferenceWatcher, SystemPreference, ThemeSource};

use serde::{Deserialize, Serialize};

/// Root class applied when the OS prefers a dark color scheme.
pub const DARK_CLASS: &str = "theme-dark";
/// Root class applied otherwise.
pub const LIGHT_CLASS: &str = "theme-light";
/// White camera icon, readable on dark window chrome.
pub const DARK_ICON: &str = "/camera_white.png";
/// Black camera icon, readable on light window chrome.
pub const LIGHT_ICON: &str = "/camera_black.png";

/// The OS color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

/// Concrete visual state derived from a [`ThemePreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedTheme {
    pub root_class: &'static str,
    pub icon_path: &'static str,
}

impl AppliedTheme {
    #[must_use]
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self {
                root_class: DARK_CLASS,
                icon_path: DARK_ICON,
            },
            ThemePreference::Light => Self {
                root_class: LIGHT_CLASS,
                icon_path: LIGHT_ICON,
            },
        }
    }
}

impl From<ThemePreference> for AppliedTheme {
    fn from(preference: ThemePreference) -> Self {
        Self::for_preference(preference)
    }
}

/// How the preference source is chosen, as written in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Writes the theme for `preference` into the two target attributes.
///
/// The root class is replaced, never appended to.
pub fn apply_theme(preference: ThemePreference, targets: ThemeTargets<'_>) -> AppliedTheme {
    let applied = AppliedTheme::for_preference(preference);
    targets.root_class.clear();
    targets.root_class.push_str(applied.root_class);
    targets.favicon_href.clear();
    targets.favicon_href.push_str(applied.icon_path);
    applied
}

/// Maps the root class back to the iced theme the window is drawn with.
#[must_use]
pub fn iced_theme_for_class(root_class: &str) -> iced::Theme {
    if root_class == DARK_CLASS {
        iced::Theme::Dark
    } else {
        iced::Theme::Light
    }
}
