// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navbar and
//! the current screen based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::accounts::{self, ViewContext as AccountsViewContext};
use crate::ui::components::skeleton;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub accounts: Option<&'a accounts::State>,
    pub endpoint: &'a str,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen.nav_item(),
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Accounts => view_accounts(ctx.accounts, ctx.i18n),
        Screen::About => view_about(ctx.i18n, ctx.endpoint),
    };

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_accounts<'a>(state: Option<&'a accounts::State>, i18n: &'a I18n) -> Element<'a, Message> {
    match state {
        Some(state) => state
            .view(AccountsViewContext { i18n })
            .map(Message::Accounts),
        // No view mounted yet renders as pending.
        None => skeleton::stack(accounts::presentation::SKELETON_BLOCKS),
    }
}

fn view_about<'a>(i18n: &'a I18n, endpoint: &'a str) -> Element<'a, Message> {
    about::view(AboutViewContext { i18n, endpoint }).map(Message::About)
}
