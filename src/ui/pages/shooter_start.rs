// SPDX-License-Identifier: MPL-2.0
use super::{layout, Message};
use crate::i18n::fluent::I18n;
use iced::Element;

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    layout(
        i18n.tr("shooter-start-page-heading"),
        i18n.tr("shooter-start-page-description"),
        Vec::new(),
    )
}
