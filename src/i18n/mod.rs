// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Page texts are looked up in Fluent catalogues embedded in the binary.
//! The locale is taken from the CLI, then the config file, then the OS, and
//! falls back to `en-US`.

pub mod fluent;
