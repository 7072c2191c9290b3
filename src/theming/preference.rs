// SPDX-License-Identifier: MPL-2.0
//! Where the light/dark preference comes from.

use super::{ThemeMode, ThemePreference};

/// Something that can answer "does the user prefer a dark color scheme?".
pub trait PreferenceSource {
    fn current(&self) -> ThemePreference;
}

/// Reads the OS preference through `dark_light`.
///
/// Only an explicit dark answer counts as dark; an unspecified mode or a
/// detection error reads as light.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPreference;

impl PreferenceSource for SystemPreference {
    fn current(&self) -> ThemePreference {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => ThemePreference::Dark,
            Ok(_) => ThemePreference::Light,
            Err(err) => {
                tracing::debug!(?err, "dark mode detection failed, assuming light");
                ThemePreference::Light
            }
        }
    }
}

/// Preference source selected from the configured [`ThemeMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    System,
    Fixed(ThemePreference),
}

impl From<ThemeMode> for ThemeSource {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::System => ThemeSource::System,
            ThemeMode::Light => ThemeSource::Fixed(ThemePreference::Light),
            ThemeMode::Dark => ThemeSource::Fixed(ThemePreference::Dark),
        }
    }
}

impl PreferenceSource for ThemeSource {
    fn current(&self) -> ThemePreference {
        match self {
            ThemeSource::System => SystemPreference.current(),
            ThemeSource::Fixed(preference) => *preference,
        }
    }
}

/// Turns periodic samples of the preference into change notifications.
#[derive(Debug, Clone, Default)]
pub struct PreferenceWatcher {
    last_seen: Option<ThemePreference>,
}

impl PreferenceWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value that was applied outside of sampling.
    pub fn seed(&mut self, preference: ThemePreference) {
        self.last_seen = Some(preference);
    }

    /// Returns `true` when `sample` differs from the previous one.
    ///
    /// The first sample after creation is a change.
    pub fn observe(&mut self, sample: ThemePreference) -> bool {
        let changed = self.last_seen != Some(sample);
        self.last_seen = Some(sample);
        changed
    }
}
