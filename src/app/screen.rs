// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::NavItem;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Accounts,
    About,
}

impl Screen {
    /// Looks up a screen by its route name (`accounts`, `about`).
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        match route.trim().trim_start_matches('/') {
            "accounts" => Some(Screen::Accounts),
            "about" => Some(Screen::About),
            _ => None,
        }
    }

    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Screen::Accounts => "accounts",
            Screen::About => "about",
        }
    }

    #[must_use]
    pub fn nav_item(self) -> NavItem {
        match self {
            Screen::Accounts => NavItem::Accounts,
            Screen::About => NavItem::About,
        }
    }
}

impl From<NavItem> for Screen {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Accounts => Screen::Accounts,
            NavItem::About => Screen::About,
        }
    }
}
