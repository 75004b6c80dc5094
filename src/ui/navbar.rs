// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! A single row at the top of every screen: the application name followed
//! by one entry per screen. The entry of the active screen is highlighted.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Navbar entries, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Accounts,
    About,
}

impl NavItem {
    pub const ALL: [NavItem; 2] = [NavItem::Accounts, NavItem::About];

    fn label_key(self) -> &'static str {
        match self {
            NavItem::Accounts => "navbar-accounts",
            NavItem::About => "navbar-about",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: NavItem,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(NavItem),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(NavItem),
}

/// Process a navbar message and return the corresponding event.
///
/// Selecting the entry that is already active yields [`Event::None`].
#[must_use]
pub fn update(message: Message, active: NavItem) -> Event {
    match message {
        Message::Select(item) if item == active => Event::None,
        Message::Select(item) => Event::Navigate(item),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        });

    let row = NavItem::ALL.into_iter().fold(
        Row::new()
            .spacing(spacing::SM)
            .padding([0.0, spacing::MD])
            .align_y(Vertical::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill)),
        |row, item| {
            let entry = button(Text::new(ctx.i18n.tr(item.label_key())).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::Select(item));
            let entry = if item == ctx.active {
                entry.style(styles::button::selected)
            } else {
                entry.style(styles::button::nav_item)
            };
            row.push(entry)
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}
