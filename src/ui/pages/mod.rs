// SPDX-License-Identifier: MPL-2.0
//! Page bodies, one per route plus the error view.

pub mod error;
pub mod root;
pub mod shooter;
pub mod shooter_start;

use crate::navigation::{Navigator, Route};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Messages emitted by page bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(Route),
    Back,
}

pub fn update<N>(message: Message, navigator: &mut N)
where
    N: Navigator + ?Sized,
{
    match message {
        Message::Open(route) => navigator.navigate(route.path()),
        Message::Back => navigator.go_back(),
    }
}

/// Heading, description and optional extra widgets in a centered column.
fn layout<'a>(
    heading: String,
    description: String,
    extra: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(heading).size(typography::TITLE_LG))
        .push(Text::new(description).size(typography::BODY));

    for element in extra {
        column = column.push(element);
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

fn primary_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::History;

    #[test]
    fn open_pushes_the_route_path() {
        let mut history = History::default();
        update(Message::Open(Route::Shooter), &mut history);
        assert_eq!(history.current_path(), "/shooter");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn back_returns_to_previous_page() {
        let mut history = History::default();
        update(Message::Open(Route::Shooter), &mut history);
        update(Message::Back, &mut history);
        assert_eq!(history.current_path(), "/");
    }
}
