// SPDX-License-Identifier: MPL-2.0
//! Account records as served by the ledger service.
//!
//! Records are owned by the remote service and treated as immutable
//! snapshots. Only the fields the table renders are required on the wire;
//! the bookkeeping fields fall back to their defaults when absent.

mod balance;

pub use balance::{Balance, BalanceSign};

use serde::{Deserialize, Deserializer, Serialize};

/// A ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: String,
    #[serde(default)]
    pub allow_negative_balance: bool,
    #[serde(default)]
    pub allow_positive_balance: bool,
    /// Decimal amount kept as text so no precision is lost in transit.
    #[serde(deserialize_with = "deserialize_balance")]
    pub balance: String,
    pub currency: String,
    #[serde(default)]
    pub metadata: Option<AccountMetadata>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub version: String,
}

/// Free-form classification attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadata {
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl AccountMetadata {
    /// Category, if present and non-empty.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    /// Note, if present and non-empty.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        non_empty(self.note.as_deref())
    }
}

impl Account {
    /// Parses the textual balance.
    ///
    /// Returns `None` when the service sent something that is not a finite
    /// decimal number.
    #[must_use]
    pub fn parsed_balance(&self) -> Option<Balance> {
        Balance::parse(&self.balance)
    }

    /// Metadata category, if the account carries a non-empty one.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(AccountMetadata::category)
    }

    /// Metadata note, if the account carries a non-empty one.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(AccountMetadata::note)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Accepts any JSON value as the balance.
///
/// Strings pass through and numbers keep their textual form (out-of-range
/// ones included). Any other value is kept as its JSON text, which never
/// parses as a [`Balance`], so only that row is marked invalid.
fn deserialize_balance<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        other => other.to_string(),
    })
}
