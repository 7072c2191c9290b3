// SPDX-License-Identifier: MPL-2.0
//! Landing page.

use super::{layout, primary_button, Message};
use crate::i18n::fluent::I18n;
use crate::navigation::Route;
use iced::Element;

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    layout(
        i18n.tr("root-page-heading"),
        i18n.tr("root-page-description"),
        vec![primary_button(
            i18n.tr("root-page-open-shooter"),
            Message::Open(Route::Shooter),
        )],
    )
}
