// SPDX-License-Identifier: MPL-2.0
//! Alert panel with an icon slot, a title, and a description.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::alert::Alert;
//!
//! Alert::new()
//!     .title("Error")
//!     .description("error sending request for url (http://localhost:5000/accounts)")
//!     .view()
//! ```

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, font, Element, Font, Length};

/// Glyph placed in the icon slot when none is supplied.
pub const DEFAULT_ICON: &str = "\u{26A0}";

/// Builder for a destructive alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    icon: String,
    title: Option<String>,
    description: Option<String>,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON.to_string(),
            title: None,
            description: None,
        }
    }
}

impl Alert {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the icon glyph.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the title (main heading).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description (the underlying message).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Renders the alert.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let icon = Container::new(Text::new(self.icon).size(sizing::ICON_SM))
            .width(Length::Shrink)
            .align_x(alignment::Horizontal::Center);

        let mut content = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(
                Text::new(title)
                    .size(typography::BODY)
                    .font(Font {
                        weight: font::Weight::Semibold,
                        ..Font::DEFAULT
                    })
                    .style(styles::text::negative),
            );
        }

        if let Some(description) = self.description {
            content = content.push(Text::new(description).size(typography::BODY_SM));
        }

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(content);

        Container::new(row)
            .width(Length::Fill)
            .max_width(sizing::ALERT_MAX_WIDTH)
            .padding(spacing::MD)
            .style(styles::container::alert)
            .into()
    }
}
