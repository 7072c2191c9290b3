// SPDX-License-Identifier: MPL-2.0
//! Session history backing the [`Navigator`] seam.

use super::Navigator;

/// Visited paths with a cursor, like a browser tab's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: vec![initial_path.to_string()],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Moves one entry forward. No-op at the newest entry.
    pub fn go_forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
            tracing::debug!(path = %self.current_path(), "navigated forward");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for History {
    fn current_path(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Pushes `path`, dropping any entries ahead of the cursor.
    fn navigate(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
        tracing::debug!(path, "navigated");
    }

    /// Moves one entry back. No-op at the oldest entry.
    fn go_back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
            tracing::debug!(path = %self.current_path(), "navigated back");
        } else {
            tracing::debug!("already at the oldest history entry");
        }
    }
}
