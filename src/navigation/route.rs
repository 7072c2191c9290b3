// SPDX-License-Identifier: MPL-2.0
//! Route table.

/// Pages reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Shooter,
    ShooterStart,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Root, Route::Shooter, Route::ShooterStart];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Shooter => "/shooter",
            Route::ShooterStart => "/shooter_start",
        }
    }

    /// Matches a path against the table.
    ///
    /// Query string, fragment and a trailing slash are ignored and the
    /// comparison is case-insensitive.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Route> {
        let normalized = normalize(path);
        Route::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(normalized))
    }
}

/// Result of dispatching a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteState {
    Page(Route),
    /// No route matched; carries the path as requested.
    NotFound(String),
}

impl RouteState {
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        match Route::from_path(path) {
            Some(route) => RouteState::Page(route),
            None => RouteState::NotFound(path.to_string()),
        }
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Whether `path` is the root route.
#[must_use]
pub fn is_root_path(path: &str) -> bool {
    Route::from_path(path) == Some(Route::Root)
}
