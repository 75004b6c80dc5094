// SPDX-License-Identifier: MPL-2.0
//! Small pill-shaped tag.

use crate::ui::accounts::BadgeVariant;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{font, Element, Font};

/// Renders `label` inside a badge of the given variant.
pub fn badge<'a, Message: 'a>(label: impl Into<String>, variant: BadgeVariant) -> Element<'a, Message> {
    let text = Text::new(label.into())
        .size(typography::CAPTION)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        });

    Container::new(text)
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::badge(variant))
        .into()
}
