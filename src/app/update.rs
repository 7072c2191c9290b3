// SPDX-License-Identifier: MPL-2.0
//! Theme-related message handlers.
//!
//! Each handler feeds one trigger to the theme controller and turns the
//! outcome into a window icon update.

use super::Message;
use crate::error::Result;
use crate::icon;
use crate::theming::{
    AppliedTheme, Document, PreferenceSource, PreferenceWatcher, ReadyState, ThemeController,
    ThemeSource, Trigger,
};
use iced::{window, Task};

/// Mutable view over the application fields the handlers touch.
pub struct UpdateContext<'a> {
    pub document: &'a mut Document,
    pub theme_controller: &'a mut ThemeController,
    pub theme_source: &'a ThemeSource,
    pub preference_watcher: &'a mut PreferenceWatcher,
    pub window_id: &'a mut Option<window::Id>,
}

/// Handles `Trigger::Startup` while the window is not open yet.
pub fn handle_startup(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let sample = ctx.theme_source.current();
    let result = ctx.theme_controller.handle(
        Trigger::Startup,
        &ThemeSource::Fixed(sample),
        ctx.document,
    );
    if matches!(result, Ok(Some(_))) {
        ctx.preference_watcher.seed(sample);
    }
    finish_evaluation(ctx, result)
}

/// Marks the document ready and runs the deferred first evaluation.
pub fn handle_window_opened(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if ctx.window_id.is_some() {
        return Task::none();
    }
    *ctx.window_id = Some(id);
    ctx.document.set_ready_state(ReadyState::Interactive);

    let sample = ctx.theme_source.current();
    ctx.preference_watcher.seed(sample);
    let result = ctx.theme_controller.handle(
        Trigger::DocumentReady,
        &ThemeSource::Fixed(sample),
        ctx.document,
    );
    finish_evaluation(ctx, result)
}

/// Samples the OS preference and forwards actual changes to the controller.
pub fn handle_theme_poll(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let sample = ctx.theme_source.current();
    if !ctx.preference_watcher.observe(sample) {
        return Task::none();
    }

    tracing::debug!(?sample, "OS color scheme preference changed");
    let result = ctx.theme_controller.handle(
        Trigger::PreferenceChanged,
        &ThemeSource::Fixed(sample),
        ctx.document,
    );
    finish_evaluation(ctx, result)
}

fn finish_evaluation(
    ctx: &UpdateContext<'_>,
    result: Result<Option<AppliedTheme>>,
) -> Task<Message> {
    match result {
        Ok(Some(applied)) => window_icon_task(*ctx.window_id, applied.icon_path),
        Ok(None) => Task::none(),
        Err(err) => {
            tracing::error!(%err, "theme evaluation aborted");
            Task::none()
        }
    }
}

fn window_icon_task(window_id: Option<window::Id>, icon_path: &str) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::none();
    };

    match icon::load_window_icon(icon_path) {
        Ok(window_icon) => window::set_icon(id, window_icon),
        Err(err) => {
            tracing::warn!(%err, icon_path, "could not update window icon");
            Task::none()
        }
    }
}
