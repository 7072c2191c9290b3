// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the two independent halves of the front end: the
//! theme side (document model, controller, preference source) and the
//! navigation side (session history). Messages are routed to one or the
//! other; they never talk to each other.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::navigation::{History, Navigator};
use crate::theming::{self, Document, PreferenceWatcher, ThemeController, ThemeSource};
use crate::ui::{pages, title_bar};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    document: Document,
    theme_controller: ThemeController,
    theme_source: ThemeSource,
    preference_watcher: PreferenceWatcher,
    poll_interval: Duration,
    history: History,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("path", &self.history.current_path())
            .field("root_class", &self.document.root_class())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
///
/// No icon is set here: the theme controller picks one once the window is
/// open.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_error) = config::load();
        if let Some(err) = config_error {
            tracing::warn!(%err, "could not load settings, using defaults");
        }
        Self::with_config(flags, &config)
    }

    fn with_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let start_path = flags
            .route
            .unwrap_or_else(|| config.navigation.start_route.clone());
        tracing::info!(path = %start_path, theme_mode = ?config.theme.mode, "starting");

        let mut app = App {
            i18n,
            document: Document::new(),
            theme_controller: ThemeController::new(config.theme.listens_for_changes()),
            theme_source: ThemeSource::from(config.theme.mode),
            preference_watcher: PreferenceWatcher::new(),
            poll_interval: config.theme.poll_interval(),
            history: History::new(&start_path),
            window_id: None,
        };

        let task = update::handle_startup(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            document: &mut self.document,
            theme_controller: &mut self.theme_controller,
            theme_source: &self.theme_source,
            preference_watcher: &mut self.preference_watcher,
            window_id: &mut self.window_id,
        }
    }

    fn title(&self) -> String {
        title_bar::TITLE_TEXT.to_string()
    }

    fn theme(&self) -> Theme {
        theming::iced_theme_for_class(self.document.root_class())
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let theme_sub = subscription::create_theme_subscription(
            self.theme_controller.is_listening(),
            self.poll_interval,
        );

        Subscription::batch([event_sub, theme_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleBar(title_bar_message) => {
                title_bar::update(title_bar_message, &mut self.history);
                Task::none()
            }
            Message::Page(page_message) => {
                pages::update(page_message, &mut self.history);
                Task::none()
            }
            Message::HistoryBack => {
                self.history.go_back();
                Task::none()
            }
            Message::HistoryForward => {
                self.history.go_forward();
                Task::none()
            }
            Message::WindowOpened(id) => update::handle_window_opened(&mut self.update_context(), id),
            Message::ThemePoll(_instant) => update::handle_theme_poll(&mut self.update_context()),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            path: self.history.current_path(),
        })
    }
}
