// SPDX-License-Identifier: MPL-2.0
//! Header bar shown above the active screen.
//!
//! On the capture screen it is just the app title; on the gallery it adds
//! the back control and a title carrying the live image count.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    /// Image count the gallery title shows; always the number the user is
    /// looking at.
    pub count: usize,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Back,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title_text = match ctx.screen {
        Screen::Capture => ctx.i18n.tr("window-title"),
        Screen::Gallery => ctx.i18n.tr_count("gallery-title", ctx.count),
    };

    let title = Text::new(title_text).size(typography::TITLE_SM);

    let row = match ctx.screen {
        Screen::Capture => Row::new().push(
            Container::new(title)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        ),
        Screen::Gallery => {
            let back_button = button(Text::new(ctx.i18n.tr("gallery-back")).size(typography::BODY))
                .style(styles::button::text_link)
                .on_press(Message::Back);

            // Trailing spacer keeps the title optically centered.
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(Container::new(back_button).width(Length::FillPortion(1)))
                .push(
                    Container::new(title)
                        .width(Length::FillPortion(2))
                        .align_x(alignment::Horizontal::Center),
                )
                .push(Container::new(Text::new("")).width(Length::FillPortion(1)))
        }
    };

    Container::new(row.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::header)
        .into()
}
