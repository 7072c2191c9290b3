// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": components render from borrowed
//! state and emit messages the application routes back to them.
//!
//! - [`title_bar`] - Title, subtitle and the conditional back button
//! - [`pages`] - One body per route plus the error view
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod pages;
pub mod styles;
pub mod title_bar;
