// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the title bar and the pages.

pub mod button;
pub mod container;
pub mod text;
