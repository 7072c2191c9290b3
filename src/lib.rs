// SPDX-License-Identifier: MPL-2.0
//! `timelapse_trigger` is the desktop front end of the Unit_Cam_S3 timelapse
//! trigger demo, built with the Iced GUI framework.
//!
//! Two independent parts make it up: a theme controller that mirrors the
//! operating system's light/dark preference onto the window, and a
//! navigation shell that maps paths to pages and shows a back button away
//! from the root page.

pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod navigation;
pub mod theming;
pub mod ui;
