// SPDX-License-Identifier: MPL-2.0
//! Capture screen rendering.

use super::{Message, Phase, State};
use crate::gateway::Source;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the capture screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Live image count, drives the gallery button.
    pub count: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = view_base(&ctx);

    if ctx.state.phase() == Phase::OptionMenuOpen {
        Stack::new()
            .push(base)
            .push(view_backdrop())
            .push(view_option_menu(ctx.i18n))
            .into()
    } else {
        base
    }
}

fn view_base<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("capture-welcome")).size(typography::TITLE_LG);

    let upload_button = button(
        Container::new(Text::new(ctx.i18n.tr("capture-upload-button")).size(typography::BODY_LG))
            .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
            .align_x(alignment::Horizontal::Center),
    )
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary)
    .on_press(Message::OpenMenu);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(upload_button);

    // The gallery entry only appears once something can be shown, matching
    // the capture-first flow.
    if ctx.count > 0 {
        let gallery_button = button(
            Container::new(
                Text::new(ctx.i18n.tr_count("capture-gallery-button", ctx.count))
                    .size(typography::BODY_LG),
            )
            .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
            .align_x(alignment::Horizontal::Center),
        )
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::success)
        .on_press(Message::GalleryRequested);

        content = content.push(gallery_button);
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_backdrop<'a>() -> Element<'a, Message> {
    mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseMenu)
    .into()
}

fn view_option_menu(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("modal-title")).size(typography::TITLE_SM);

    let library_button = button(
        Container::new(Text::new(i18n.tr("modal-library")).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::option)
    .on_press(Message::SourceSelected(Source::Library));

    let camera_button = button(
        Container::new(Text::new(i18n.tr("modal-camera")).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::option)
    .on_press(Message::SourceSelected(Source::Camera));

    let cancel_button = button(
        Container::new(Text::new(i18n.tr("modal-cancel")).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::destructive)
    .on_press(Message::CloseMenu);

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(library_button)
            .push(camera_button)
            .push(cancel_button),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
