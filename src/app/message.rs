// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::pages;
use crate::ui::title_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    TitleBar(title_bar::Message),
    Page(pages::Message),
    /// The main window is open; the document structure is ready.
    WindowOpened(iced::window::Id),
    /// Periodic sample of the OS color-scheme preference.
    ThemePoll(Instant),
    /// Alt+Left.
    HistoryBack,
    /// Alt+Right.
    HistoryForward,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional initial path, as if typed into an address bar.
    pub route: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TIMELAPSE_TRIGGER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
