// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Organized the Elm way ("state down, messages up"): each screen owns its
//! state, returns `Event`s from `update`, and renders from a `ViewContext`.
//!
//! # Screens
//!
//! - [`accounts`] - Account list with loading, error and empty states
//! - [`about`] - Application version and endpoint
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Presentation primitives (table, badge, card, skeleton, alert)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar

pub mod about;
pub mod accounts;
pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod styles;
pub mod theming;
