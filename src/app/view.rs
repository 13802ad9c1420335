// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The landing page fills the window; toasts are stacked on top of it.

use super::Message;
use crate::i18n::I18n;
use crate::ui::landing::{self, ViewContext as LandingViewContext};
use crate::ui::notifications::{Manager, Toast};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub landing: &'a landing::State,
    pub notifications: &'a Manager,
    pub year: i32,
}

/// Renders the landing page with the notification overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = landing::view(LandingViewContext {
        i18n: ctx.i18n,
        state: ctx.landing,
        year: ctx.year,
    })
    .map(Message::Landing);

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
