// SPDX-License-Identifier: MPL-2.0
//! Loading placeholders.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{Column, Container, Space};
use iced::{Element, Length};

/// One full-width block the height of a table row.
pub fn block<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(sizing::SKELETON_HEIGHT)
        .style(styles::container::skeleton)
        .into()
}

/// `count` stacked blocks.
pub fn stack<'a, Message: 'a>(count: usize) -> Element<'a, Message> {
    (0..count)
        .fold(
            Column::new().spacing(spacing::XS).width(Length::Fill),
            |column, _| column.push(block()),
        )
        .into()
}
