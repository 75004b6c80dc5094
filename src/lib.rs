// SPDX-License-Identifier: MPL-2.0
//! `ledger_lens` is a read-only desktop view of ledger accounts built with the Iced GUI framework.
//!
//! It fetches the account list from a ledger service once per mount of the
//! accounts screen and renders it as a formatted table, with loading and
//! error states, Fluent localization, and user preferences in `settings.toml`.

#![doc(html_root_url = "https://docs.rs/ledger_lens/0.1.0")]

pub mod app;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
