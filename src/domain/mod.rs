// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules of the accounts view.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde`/`serde_json` describing the wire shape, it depends on
//! nothing but `std`, so it can be tested without a window or a network.
//!
//! # Modules
//!
//! - [`account`]: Ledger records ([`Account`](account::Account),
//!   [`AccountMetadata`](account::AccountMetadata), [`Balance`](account::Balance))
//! - [`network`]: Request value objects ([`RequestTimeout`](network::RequestTimeout),
//!   [`ApiBaseUrl`](network::ApiBaseUrl))

pub mod account;
pub mod network;
