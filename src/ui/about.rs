// SPDX-License-Identifier: MPL-2.0
//! About screen module displaying application information.
//!
//! Shows the version, the endpoint the accounts view fetches from, and a
//! button back to the accounts screen.

use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Full URL the accounts view requests.
    pub endpoint: &'a str,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToAccounts,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToAccounts,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToAccounts => Event::BackToAccounts,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToAccounts);

    let details = Column::new()
        .spacing(spacing::SM)
        .push(build_field(
            ctx.i18n.tr("about-version"),
            format!("v{APP_VERSION}"),
        ))
        .push(build_field(
            ctx.i18n.tr("about-endpoint"),
            ctx.endpoint.to_string(),
        ));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .push(back_button)
        .push(components::card(
            ctx.i18n.tr("about-title"),
            ctx.i18n.tr("about-description"),
            details,
        ));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

/// One label/value line.
fn build_field<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_message_maps_to_event() {
        assert_eq!(update(&Message::BackToAccounts), Event::BackToAccounts);
    }

    #[test]
    fn view_builds_element() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            endpoint: "http://localhost:5000/accounts",
        });
    }

    #[test]
    fn version_matches_manifest() {
        assert!(!APP_VERSION.is_empty());
    }
}
