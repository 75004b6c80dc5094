// SPDX-License-Identifier: MPL-2.0
//! Pure mapping from fetch state to what the screen shows.
//!
//! Nothing here touches iced; the widget layer walks a [`Presentation`]
//! and picks primitives for each part.

use super::columns::{render_row, Cell, COLUMNS};
use super::state::FetchState;
use crate::domain::account::Account;

/// Number of placeholder blocks while a request is in flight.
pub const SKELETON_BLOCKS: usize = 5;

/// i18n key of the alert title.
pub const ERROR_TITLE_KEY: &str = "accounts-error-title";

/// i18n key of the empty table message.
pub const EMPTY_MESSAGE_KEY: &str = "accounts-empty";

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub account_id: String,
    pub cells: Vec<Cell>,
}

/// Fetched accounts together with their rows, formatted once.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountTable {
    accounts: Vec<Account>,
    rows: Vec<Row>,
}

impl AccountTable {
    /// Formats every record. Input order is preserved.
    #[must_use]
    pub fn new(accounts: Vec<Account>) -> Self {
        let rows = accounts
            .iter()
            .map(|account| Row {
                account_id: account.id.clone(),
                cells: render_row(account),
            })
            .collect();
        Self { accounts, rows }
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Table body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body<'a> {
    /// A single row spanning `span` columns.
    Empty {
        message_key: &'static str,
        span: usize,
    },
    Rows(&'a [Row]),
}

/// Render mode of the accounts view.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<'a> {
    /// Placeholder blocks approximating row geometry.
    Skeleton { blocks: usize },
    /// One alert panel; no table.
    Alert {
        title_key: &'static str,
        message: String,
    },
    /// Header row plus body.
    Table {
        header_keys: Vec<&'static str>,
        body: Body<'a>,
    },
}

impl Presentation<'_> {
    #[must_use]
    pub fn is_skeleton(&self) -> bool {
        matches!(self, Presentation::Skeleton { .. })
    }

    #[must_use]
    pub fn is_alert(&self) -> bool {
        matches!(self, Presentation::Alert { .. })
    }

    #[must_use]
    pub fn is_table(&self) -> bool {
        matches!(self, Presentation::Table { .. })
    }
}

/// Header label keys, left to right.
#[must_use]
pub fn header_keys() -> Vec<&'static str> {
    COLUMNS.iter().map(|column| column.header_key).collect()
}

/// Selects the render mode for `state`.
#[must_use]
pub fn present(state: &FetchState<AccountTable>) -> Presentation<'_> {
    match state {
        FetchState::Idle | FetchState::Loading => Presentation::Skeleton {
            blocks: SKELETON_BLOCKS,
        },
        FetchState::Error(error) => Presentation::Alert {
            title_key: ERROR_TITLE_KEY,
            message: error.to_string(),
        },
        FetchState::Success(table) => {
            let body = if table.is_empty() {
                Body::Empty {
                    message_key: EMPTY_MESSAGE_KEY,
                    span: COLUMNS.len(),
                }
            } else {
                Body::Rows(table.rows())
            };
            Presentation::Table {
                header_keys: header_keys(),
                body,
            }
        }
    }
}
