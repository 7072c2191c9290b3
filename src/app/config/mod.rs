// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language
//! - `[theme]` - Theme mode and how the OS preference is watched
//! - `[navigation]` - Initial route
//!
//! The front end never writes this file; it is edited by hand.
//!
//! # Examples
//!
//! ```no_run
//! use timelapse_trigger::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(err) = warning {
//!     eprintln!("using defaults: {err}");
//! }
//! println!("{:?}", config.theme.mode);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Theme settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Follow the OS preference (`system`) or pin a theme.
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub mode: ThemeMode,

    /// Whether OS preference changes are picked up while running.
    #[serde(default = "default_watch_system")]
    pub watch_system: bool,

    /// Interval between two reads of the OS preference, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            watch_system: default_watch_system(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ThemeConfig {
    /// Poll interval clamped to the supported range.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.poll_interval_ms
                .clamp(MIN_THEME_POLL_INTERVAL_MS, MAX_THEME_POLL_INTERVAL_MS),
        )
    }

    /// Whether a change-event source exists at all.
    ///
    /// A pinned theme has nothing to watch.
    #[must_use]
    pub fn listens_for_changes(&self) -> bool {
        self.watch_system && self.mode == ThemeMode::System
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Path opened at startup when `--route` is not given.
    #[serde(default = "default_start_route")]
    pub start_route: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_watch_system() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_THEME_POLL_INTERVAL_MS
}

fn default_start_route() -> String {
    DEFAULT_START_ROUTE.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_error). When the file exists but
/// cannot be read or parsed, the defaults are returned with the error.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => return (Config::default(), Some(err)),
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write config");
        path
    }

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(
            temp_dir.path(),
            r#"
[general]
language = "fr"

[theme]
mode = "dark"
watch_system = false
poll_interval_ms = 250

[navigation]
start_route = "/shooter"
"#,
        );

        let config = load_from_path(&path).expect("failed to load config");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert!(!config.theme.watch_system);
        assert_eq!(config.theme.poll_interval_ms, 250);
        assert_eq!(config.navigation.start_route, "/shooter");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[general]\nlanguage = \"en-US\"\n");

        let config = load_from_path(&path).expect("failed to load config");

        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.navigation.start_route, DEFAULT_START_ROUTE);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[theme]\nmode = \"LIGHT\"\n").expect("valid toml");
        assert_eq!(config.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[theme]\nmode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "this is not = [toml");

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_defaults_and_error_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(temp_dir.path(), "[theme\n");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn poll_interval_is_clamped() {
        let fast = ThemeConfig {
            poll_interval_ms: 1,
            ..ThemeConfig::default()
        };
        let slow = ThemeConfig {
            poll_interval_ms: u64::MAX,
            ..ThemeConfig::default()
        };

        assert_eq!(
            fast.poll_interval(),
            Duration::from_millis(MIN_THEME_POLL_INTERVAL_MS)
        );
        assert_eq!(
            slow.poll_interval(),
            Duration::from_millis(MAX_THEME_POLL_INTERVAL_MS)
        );
    }

    #[test]
    fn pinned_theme_does_not_listen() {
        let pinned = ThemeConfig {
            mode: ThemeMode::Dark,
            ..ThemeConfig::default()
        };
        let unwatched = ThemeConfig {
            watch_system: false,
            ..ThemeConfig::default()
        };

        assert!(ThemeConfig::default().listens_for_changes());
        assert!(!pinned.listens_for_changes());
        assert!(!unwatched.listens_for_changes());
    }
}
