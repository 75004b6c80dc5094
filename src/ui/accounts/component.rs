// SPDX-License-Identifier: MPL-2.0
//! Accounts view: owns one fetch and renders its result.
//!
//! A `State` lives exactly as long as the view is mounted. Creating one and
//! calling [`State::start`] issues the request; dropping it (or calling
//! [`State::unmount`]) triggers the cancellation token so a late response
//! can never land in a view that is gone or has been replaced.

use super::columns::{Cell, CellStyle, COLUMNS};
use super::presentation::{self, AccountTable, Body, Presentation};
use super::state::FetchState;
use crate::data_source::{self, AccountDataSource, CancellationToken};
use crate::domain::account::Account;
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::ui::components::{self, skeleton, table, Alert};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{Container, Text};
use iced::{Element, Font, Length, Task};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one mount of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Contextual data needed to render the view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    AccountsLoaded {
        mount: MountId,
        result: Result<Vec<Account>, FetchError>,
    },
}

/// Outcome of handling a message, reported to the parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The fetch reached `Success`.
    Loaded { count: usize },
    /// The fetch reached `Error`.
    Failed(FetchError),
    /// The result belonged to a cancelled or different mount.
    StaleResultDropped,
}

/// Per-mount view state.
#[derive(Debug)]
pub struct State {
    mount: MountId,
    token: CancellationToken,
    fetch: FetchState<AccountTable>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for State {
    fn drop(&mut self) {
        data_source::cancel(&self.token);
    }
}

impl State {
    /// Creates an idle view with its own cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mount: MountId::next(),
            token: data_source::new_cancellation_token(),
            fetch: FetchState::Idle,
        }
    }

    /// Creates a view and immediately starts its fetch.
    pub fn mount(source: &AccountDataSource) -> (Self, Task<Message>) {
        let mut state = Self::new();
        let task = state.start(source);
        (state, task)
    }

    /// Issues the request for this mount.
    ///
    /// Only the first call does anything; later calls return `Task::none()`.
    pub fn start(&mut self, source: &AccountDataSource) -> Task<Message> {
        if self.fetch.begin().is_err() {
            return Task::none();
        }

        let source = source.clone();
        let token = self.token.clone();
        let mount = self.mount;
        Task::perform(
            async move { source.fetch_accounts(token).await },
            move |result| Message::AccountsLoaded { mount, result },
        )
    }

    /// Settles the view on `error` when no request can be issued at all.
    ///
    /// Ignored once a request has been issued.
    pub fn abort(&mut self, error: FetchError) {
        if let Err(transition) = self.fetch.begin() {
            tracing::debug!(?transition, "abort ignored, request already issued");
            return;
        }
        tracing::warn!(%error, "accounts request could not be issued");
        let resolved = self.fetch.resolve(Err(error));
        debug_assert!(resolved.is_ok(), "Loading always resolves");
    }

    /// Cancels the in-flight request, if any.
    pub fn unmount(&self) {
        data_source::cancel(&self.token);
    }

    #[must_use]
    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        data_source::is_cancelled(&self.token)
    }

    #[must_use]
    pub fn fetch_state(&self) -> &FetchState<AccountTable> {
        &self.fetch
    }

    /// Render mode for the current state.
    #[must_use]
    pub fn presentation(&self) -> Presentation<'_> {
        presentation::present(&self.fetch)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AccountsLoaded { mount, result } => {
                if mount != self.mount || self.is_cancelled() {
                    tracing::debug!(?mount, current = ?self.mount, "dropping stale accounts result");
                    return Event::StaleResultDropped;
                }

                let event = match &result {
                    Ok(accounts) => Event::Loaded {
                        count: accounts.len(),
                    },
                    Err(error) => Event::Failed(error.clone()),
                };

                match self.fetch.resolve(result.map(AccountTable::new)) {
                    Ok(()) => event,
                    Err(_) => Event::None,
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let content: Element<'a, Message> = match self.presentation() {
            Presentation::Alert { title_key, message } => {
                return page(
                    Alert::new()
                        .title(i18n.tr(title_key))
                        .description(message)
                        .view(),
                );
            }
            Presentation::Skeleton { blocks } => skeleton::stack(blocks),
            Presentation::Table { header_keys, body } => {
                view_table(i18n, &header_keys, body)
            }
        };

        page(components::card(
            i18n.tr("accounts-title"),
            i18n.tr("accounts-description"),
            content,
        ))
    }
}

fn page<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn view_table<'a>(i18n: &I18n, header_keys: &[&str], body: Body<'a>) -> Element<'a, Message> {
    let widths: Vec<u16> = COLUMNS.iter().map(|column| column.width_portion).collect();
    let labels = header_keys.iter().map(|key| i18n.tr(key)).collect();
    let header = table::header_row(labels, &widths);

    let rows = match body {
        Body::Empty { message_key, .. } => vec![table::spanning_row(
            Text::new(i18n.tr(message_key))
                .size(typography::BODY)
                .style(styles::text::muted)
                .into(),
        )],
        Body::Rows(rows) => rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let cells = row.cells.iter().map(|cell| view_cell(i18n, cell)).collect();
                table::body_row(cells, &widths, index)
            })
            .collect(),
    };

    table::table(header, rows)
}

fn view_cell<'a>(i18n: &I18n, cell: &'a Cell) -> Element<'a, Message> {
    let semibold = Font {
        weight: Weight::Semibold,
        ..Font::default()
    };

    match cell.style {
        CellStyle::Strong => Text::new(cell.text.as_str())
            .size(typography::BODY)
            .font(Font {
                weight: Weight::Medium,
                ..Font::default()
            })
            .into(),
        CellStyle::Badge(variant) => components::badge(cell.text.as_str(), variant),
        CellStyle::Positive => Text::new(cell.text.as_str())
            .size(typography::BODY)
            .font(semibold)
            .style(styles::text::positive)
            .into(),
        CellStyle::Negative => Text::new(cell.text.as_str())
            .size(typography::BODY)
            .font(semibold)
            .style(styles::text::negative)
            .into(),
        CellStyle::Muted | CellStyle::Placeholder => Text::new(cell.text.as_str())
            .size(typography::BODY_SM)
            .style(styles::text::muted)
            .into(),
        CellStyle::Invalid => Text::new(i18n.tr("accounts-balance-invalid"))
            .size(typography::BODY_SM)
            .style(styles::text::invalid)
            .into(),
    }
}
