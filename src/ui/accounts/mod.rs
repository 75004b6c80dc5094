// SPDX-License-Identifier: MPL-2.0
//! Accounts screen.
//!
//! - [`state`]: fetch lifecycle
//! - [`columns`]: per-column formatting with fallbacks
//! - [`presentation`]: state to render mode, free of widgets
//! - [`component`]: mount, update and view

pub mod columns;
pub mod component;
pub mod presentation;
pub mod state;

pub use columns::{BadgeVariant, Cell, CellStyle, Column, ColumnId, COLUMNS};
pub use component::{Event, Message, State, ViewContext};
pub use presentation::{present, AccountTable, Body, Presentation};
pub use state::FetchState;
