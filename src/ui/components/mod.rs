// SPDX-License-Identifier: MPL-2.0
//! Presentation primitives shared by screens.

pub mod alert;
pub mod badge;
pub mod card;
pub mod skeleton;
pub mod table;

pub use alert::Alert;
pub use badge::badge;
pub use card::card;
