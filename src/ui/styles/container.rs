// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Border, Theme};

/// Title bar strip, one step off the window background.
pub fn title_bar(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            width: 1.0,
            color: extended.background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    }
}
