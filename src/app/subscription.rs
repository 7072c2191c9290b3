// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Window-open notifications and the history keyboard shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(window::Event::Opened { .. }) = &event {
            return Some(Message::WindowOpened(window_id));
        }

        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
                if modifiers.alt() =>
            {
                match key.as_ref() {
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                        Some(Message::HistoryBack)
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                        Some(Message::HistoryForward)
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    })
}

/// Samples the OS preference while there is a change listener to feed.
///
/// The subscription keeps the same identity for as long as it is returned,
/// so the listener is registered once.
pub fn create_theme_subscription(listening: bool, interval: Duration) -> Subscription<Message> {
    if listening {
        time::every(interval).map(Message::ThemePoll)
    } else {
        Subscription::none()
    }
}
