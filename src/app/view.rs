// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, with the navbar above and the toast
//! overlay on top.

use super::{Message, Screen};
use crate::collection::ImageCollection;
use crate::i18n::fluent::I18n;
use crate::ui::capture;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub collection: &'a ImageCollection,
    pub capture: &'a capture::State,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Capture => capture::view(capture::ViewContext {
            i18n: ctx.i18n,
            state: ctx.capture,
            count: ctx.collection.count(),
        })
        .map(Message::Capture),
        Screen::Gallery => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            state: ctx.gallery,
            collection: ctx.collection,
        })
        .map(Message::Gallery),
    };

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        count: ctx.gallery.count(ctx.collection),
    })
    .map(Message::Navbar);

    let content = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toast_overlay)
        .into()
}
