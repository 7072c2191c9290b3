// SPDX-License-Identifier: MPL-2.0
//! Fallback view for paths with no route.
//!
//! It stays on screen until the user navigates away with one of its buttons
//! or the keyboard shortcuts.

use super::{layout, primary_button, Message};
use crate::i18n::fluent::I18n;
use crate::navigation::Route;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::Element;

pub fn view<'a>(i18n: &I18n, path: &str) -> Element<'a, Message> {
    let unmatched = Text::new(i18n.tr_with_args("error-page-path", &[("path", path)]))
        .style(styles::text::error);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("error-page-go-back")))
                .on_press(Message::Back)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::ghost),
        )
        .push(primary_button(
            i18n.tr("error-page-go-home"),
            Message::Open(Route::Root),
        ));

    layout(
        i18n.tr("error-page-heading"),
        i18n.tr("error-page-message"),
        vec![unmatched.into(), actions.into()],
    )
}
