// SPDX-License-Identifier: MPL-2.0
//! Title bar shown above every routed page.
//!
//! What the bar shows is decided by [`describe`], a pure function of the
//! current path; [`view`] only draws the resulting [`TitleBarDescriptor`].
//! The back button is the only interactive part: it asks the host
//! [`Navigator`] to go one step back and owns no route logic itself.

use crate::i18n::fluent::I18n;
use crate::navigation::{is_root_path, Navigator};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, tooltip, Column, Container, Row, Space, Text},
    Element, Length,
};

pub const TITLE_TEXT: &str = "Unit_Cam_S3 Timelapse trigger";
pub const SUBTITLE_TEXT: &str = "User Demo";

const BACK_ARROW: &str = "\u{2190}";

/// Everything the title bar renders for a given path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBarDescriptor {
    pub title_text: &'static str,
    pub show_back_button: bool,
    pub subtitle_text: &'static str,
}

/// The back button appears on every path except the root.
#[must_use]
pub fn describe(path: &str) -> TitleBarDescriptor {
    TitleBarDescriptor {
        title_text: TITLE_TEXT,
        show_back_button: !is_root_path(path),
        subtitle_text: SUBTITLE_TEXT,
    }
}

/// Contextual data needed to render the title bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub descriptor: TitleBarDescriptor,
}

/// Messages emitted by the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BackPressed,
}

pub fn update<N>(message: Message, navigator: &mut N)
where
    N: Navigator + ?Sized,
{
    match message {
        Message::BackPressed => navigator.go_back(),
    }
}

/// Render the title bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let descriptor = ctx.descriptor;

    let mut title_row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM);

    if descriptor.show_back_button {
        title_row = title_row.push(build_back_button(ctx.i18n));
    }

    title_row = title_row.push(Text::new(descriptor.title_text).size(typography::TITLE_MD));

    let subtitle_row = Row::new()
        .push(
            Text::new(descriptor.subtitle_text)
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .push(Space::new().width(Length::Fill));

    let content = Column::new()
        .padding([spacing::XXS, spacing::LG])
        .push(title_row)
        .push(subtitle_row);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TITLE_BAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::title_bar)
        .into()
}

fn build_back_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let arrow = button(Text::new(BACK_ARROW).size(sizing::ICON_SM))
        .on_press(Message::BackPressed)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let tip = Container::new(Text::new(i18n.tr("back-button-label")).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(styles::container::title_bar);

    tooltip(arrow, tip, tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        path: String,
        back_requests: usize,
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> &str {
            &self.path
        }

        fn navigate(&mut self, path: &str) {
            self.path = path.to_string();
        }

        fn go_back(&mut self) {
            self.back_requests += 1;
        }
    }

    #[test]
    fn root_path_hides_back_button() {
        let descriptor = describe("/");
        assert!(!descriptor.show_back_button);
    }

    #[test]
    fn page_paths_show_back_button() {
        assert!(describe("/shooter").show_back_button);
        assert!(describe("/shooter_start").show_back_button);
    }

    #[test]
    fn unknown_paths_are_not_root() {
        assert!(describe("/nowhere").show_back_button);
    }

    #[test]
    fn texts_are_constant() {
        for path in ["/", "/shooter", "/shooter_start"] {
            let descriptor = describe(path);
            assert_eq!(descriptor.title_text, "Unit_Cam_S3 Timelapse trigger");
            assert_eq!(descriptor.subtitle_text, "User Demo");
        }
    }

    #[test]
    fn back_press_issues_exactly_one_back_request() {
        let mut navigator = RecordingNavigator {
            path: "/shooter".to_string(),
            ..Default::default()
        };

        update(Message::BackPressed, &mut navigator);

        assert_eq!(navigator.back_requests, 1);
        assert_eq!(navigator.current_path(), "/shooter");
    }
}
