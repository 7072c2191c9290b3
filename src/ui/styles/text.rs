// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Secondary text such as the subtitle row.
pub fn muted(theme: &Theme) -> text::Style {
    let color = if matches!(theme, Theme::Light) {
        palette::GRAY_400
    } else {
        palette::GRAY_200
    };
    text::Style { color: Some(color) }
}

/// Text used for the unmatched path on the error page.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}
