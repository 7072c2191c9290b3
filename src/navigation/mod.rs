// SPDX-License-Identifier: MPL-2.0
//! Path-based navigation between pages.

pub mod history;
pub mod route;

pub use history::History;
pub use route::{is_root_path, Route, RouteState};

/// Host navigation facility consumed by the UI.
pub trait Navigator {
    /// Path currently displayed.
    fn current_path(&self) -> &str;

    /// Shows `path`, recording it as a new history entry.
    fn navigate(&mut self, path: &str);

    /// Requests one step backward in history.
    fn go_back(&mut self);
}
