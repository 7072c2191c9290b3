// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Dispatches the current path to a page body. Matched pages get the title
//! bar on top; the error view replaces the whole window content.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::navigation::{Route, RouteState};
use crate::ui::pages;
use crate::ui::title_bar::{self, ViewContext as TitleBarViewContext};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub path: &'a str,
}

/// Renders the page for the current path.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match RouteState::resolve(ctx.path) {
        RouteState::Page(route) => view_page(ctx.i18n, ctx.path, route),
        RouteState::NotFound(path) => pages::error::view(ctx.i18n, &path).map(Message::Page),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_page<'a>(i18n: &'a I18n, path: &str, route: Route) -> Element<'a, Message> {
    let title_bar = title_bar::view(TitleBarViewContext {
        i18n,
        descriptor: title_bar::describe(path),
    })
    .map(Message::TitleBar);

    let body = match route {
        Route::Root => pages::root::view(i18n),
        Route::Shooter => pages::shooter::view(i18n),
        Route::ShooterStart => pages::shooter_start::view(i18n),
    }
    .map(Message::Page);

    Column::new()
        .push(title_bar)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
