// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// Default interval between two reads of the OS dark-mode signal.
pub const DEFAULT_THEME_POLL_INTERVAL_MS: u64 = 1_000;

/// Minimum poll interval accepted from the config file.
pub const MIN_THEME_POLL_INTERVAL_MS: u64 = 100;

/// Maximum poll interval accepted from the config file.
pub const MAX_THEME_POLL_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Path shown when neither the CLI nor the config names one.
pub const DEFAULT_START_ROUTE: &str = "/";
