// SPDX-License-Identifier: MPL-2.0
//! Card panel with a header (title + description) and a content slot.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{Column, Container, Text};
use iced::{Element, Font, Length};

pub fn card<'a, Message: 'a>(
    title: String,
    description: String,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(title)
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                }),
        )
        .push(
            Text::new(description)
                .size(typography::BODY)
                .style(styles::text::muted),
        );

    let body = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(header)
        .push(content);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
