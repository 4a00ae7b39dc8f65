// SPDX-License-Identifier: MPL-2.0
//! Gallery screen rendering: grid, empty state, and the delete prompt.

use super::{Message, State, CELL_MARGIN, COLUMNS, GRID_PADDING};
use crate::collection::ImageCollection;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub collection: &'a ImageCollection,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let items = ctx.state.items(ctx.collection);

    let body: Element<'_, Message> = if items.is_empty() {
        view_empty(ctx.i18n)
    } else {
        view_grid(&ctx)
    };

    match ctx.state.pending_delete() {
        None => body,
        Some(_) => Stack::new()
            .push(body)
            .push(view_backdrop())
            .push(view_confirm_prompt(ctx.i18n))
            .into(),
    }
}

/// Placeholder shown instead of the grid when nothing has been added yet.
fn view_empty(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_SM)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("gallery-empty-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let back_button = button(Text::new(i18n.tr("gallery-back")).size(typography::BODY_LG))
        .style(styles::button::text_link)
        .on_press(Message::BackRequested);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(back_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx.state.items(ctx.collection);
    let cell = ctx.state.cell_size();

    let mut grid = Column::new().spacing(CELL_MARGIN * 2.0);

    for (row_index, chunk) in items.chunks(COLUMNS).enumerate() {
        let mut row = Row::new().spacing(CELL_MARGIN * 2.0);
        for (col_index, image) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + col_index;

            let thumbnail = Image::new(Handle::from_path(image.as_str()))
                .width(Length::Fixed(cell))
                .height(Length::Fixed(cell))
                .content_fit(ContentFit::Cover);

            let framed = Container::new(thumbnail)
                .width(Length::Fixed(cell))
                .height(Length::Fixed(cell))
                .clip(true)
                .style(styles::container::cell);

            // Press-and-hold is the delete gesture; release timing decides
            // whether the prompt opens.
            let interactive = mouse_area(framed)
                .on_press(Message::CellPressed(index))
                .on_release(Message::CellReleased(index));

            row = row.push(interactive);
        }
        grid = grid.push(row);
    }

    scrollable(
        Container::new(grid)
            .width(Length::Fill)
            .padding(GRID_PADDING)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_backdrop<'a>() -> Element<'a, Message> {
    mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::DeleteCancelled)
    .into()
}

/// Two choices only: cancel or delete.
fn view_confirm_prompt(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("confirm-delete-title")).size(typography::TITLE_SM);
    let body = Text::new(i18n.tr("confirm-delete-body")).size(typography::BODY);

    let cancel_button = button(
        Container::new(Text::new(i18n.tr("confirm-delete-cancel")).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::option)
    .on_press(Message::DeleteCancelled);

    let delete_button = button(
        Container::new(Text::new(i18n.tr("confirm-delete-confirm")).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::destructive)
    .on_press(Message::DeleteConfirmed);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(cancel_button)
        .push(delete_button);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(body)
            .push(actions),
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
