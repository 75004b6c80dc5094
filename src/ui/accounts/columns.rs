// SPDX-License-Identifier: MPL-2.0
//! Static column table for the accounts view.
//!
//! Each column pairs a header with a pure formatter over one [`Account`]
//! field and a fallback used when the formatter has nothing to show. The
//! table is a `const` and never changes at runtime.

use crate::domain::account::{Account, BalanceSign};

/// Glyph shown for missing optional values.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Marker shown in place of a balance that is not a number.
pub const INVALID_MARKER: &str = "invalid";

/// Identifies a column; order of [`COLUMNS`] is the on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Name,
    Type,
    Balance,
    Currency,
    Category,
    Note,
}

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Filled with the brand color.
    Default,
    /// Neutral filled background.
    Secondary,
    /// Border only.
    Outline,
}

/// How a cell's text is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Emphasized body text.
    Strong,
    /// Text inside a badge.
    Badge(BadgeVariant),
    /// Semibold green amount.
    Positive,
    /// Semibold red amount.
    Negative,
    /// Small, muted text.
    Muted,
    /// Muted em dash standing in for a missing value.
    Placeholder,
    /// Unparseable source value.
    Invalid,
}

/// A formatted table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// The muted em dash.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER, CellStyle::Placeholder)
    }

    /// The per-row marker for unparseable data.
    #[must_use]
    pub fn invalid() -> Self {
        Self::new(INVALID_MARKER, CellStyle::Invalid)
    }
}

/// What to render when a formatter yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Placeholder,
    Invalid,
}

impl Fallback {
    #[must_use]
    pub fn cell(self) -> Cell {
        match self {
            Fallback::Placeholder => Cell::placeholder(),
            Fallback::Invalid => Cell::invalid(),
        }
    }
}

/// One entry of the column table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub id: ColumnId,
    /// i18n key of the header label.
    pub header_key: &'static str,
    /// Relative width of the column.
    pub width_portion: u16,
    formatter: fn(&Account) -> Option<Cell>,
    fallback: Fallback,
}

impl Column {
    /// Formats `account` for this column, applying the fallback if needed.
    #[must_use]
    pub fn render(&self, account: &Account) -> Cell {
        (self.formatter)(account).unwrap_or_else(|| self.fallback.cell())
    }

    #[must_use]
    pub fn fallback(&self) -> Fallback {
        self.fallback
    }
}

pub const COLUMNS: [Column; 6] = [
    Column {
        id: ColumnId::Name,
        header_key: "accounts-column-name",
        width_portion: 3,
        formatter: format_name,
        fallback: Fallback::Placeholder,
    },
    Column {
        id: ColumnId::Type,
        header_key: "accounts-column-type",
        width_portion: 2,
        formatter: format_type,
        fallback: Fallback::Placeholder,
    },
    Column {
        id: ColumnId::Balance,
        header_key: "accounts-column-balance",
        width_portion: 2,
        formatter: format_balance,
        fallback: Fallback::Invalid,
    },
    Column {
        id: ColumnId::Currency,
        header_key: "accounts-column-currency",
        width_portion: 1,
        formatter: format_currency,
        fallback: Fallback::Placeholder,
    },
    Column {
        id: ColumnId::Category,
        header_key: "accounts-column-category",
        width_portion: 2,
        formatter: format_category,
        fallback: Fallback::Placeholder,
    },
    Column {
        id: ColumnId::Note,
        header_key: "accounts-column-note",
        width_portion: 3,
        formatter: format_note,
        fallback: Fallback::Placeholder,
    },
];

/// Formats every column of one record, left to right.
#[must_use]
pub fn render_row(account: &Account) -> Vec<Cell> {
    COLUMNS.iter().map(|column| column.render(account)).collect()
}

fn format_name(account: &Account) -> Option<Cell> {
    Some(Cell::new(account.name.clone(), CellStyle::Strong))
}

fn format_type(account: &Account) -> Option<Cell> {
    Some(Cell::new(
        capitalize_words(&account.account_type),
        CellStyle::Badge(BadgeVariant::Outline),
    ))
}

fn format_balance(account: &Account) -> Option<Cell> {
    let balance = account.parsed_balance()?;
    let style = match balance.sign() {
        BalanceSign::Negative => CellStyle::Negative,
        BalanceSign::NonNegative => CellStyle::Positive,
    };
    Some(Cell::new(balance.display(), style))
}

fn format_currency(account: &Account) -> Option<Cell> {
    Some(Cell::new(
        account.currency.clone(),
        CellStyle::Badge(BadgeVariant::Secondary),
    ))
}

fn format_category(account: &Account) -> Option<Cell> {
    account
        .category()
        .map(|category| Cell::new(category, CellStyle::Badge(BadgeVariant::Default)))
}

fn format_note(account: &Account) -> Option<Cell> {
    account.note().map(|note| Cell::new(note, CellStyle::Muted))
}

/// Uppercases the first letter of each whitespace-separated word.
///
/// The remaining letters are left untouched, so `"ASSET"` stays `"ASSET"`
/// and `"credit card"` becomes `"Credit Card"`.
#[must_use]
pub fn capitalize_words(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountMetadata;

    fn account(balance: &str, metadata: Option<AccountMetadata>) -> Account {
        Account {
            id: "acc".to_string(),
            name: "Petty Cash".to_string(),
            account_type: "asset".to_string(),
            allow_negative_balance: false,
            allow_positive_balance: true,
            balance: balance.to_string(),
            currency: "USD".to_string(),
            metadata,
            created_at: String::new(),
            updated_at: String::new(),
            version: "1".to_string(),
        }
    }

    fn cell(account: &Account, id: ColumnId) -> Cell {
        COLUMNS
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.render(account))
            .expect("column exists")
    }

    #[test]
    fn column_order_is_fixed() {
        let ids: Vec<_> = COLUMNS.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                ColumnId::Name,
                ColumnId::Type,
                ColumnId::Balance,
                ColumnId::Currency,
                ColumnId::Category,
                ColumnId::Note,
            ]
        );
    }

    #[test]
    fn name_is_strong_and_verbatim() {
        let c = cell(&account("1", None), ColumnId::Name);
        assert_eq!(c.text, "Petty Cash");
        assert_eq!(c.style, CellStyle::Strong);
    }

    #[test]
    fn type_is_capitalized_outline_badge() {
        let mut record = account("1", None);
        record.account_type = "credit card".to_string();
        let c = cell(&record, ColumnId::Type);
        assert_eq!(c.text, "Credit Card");
        assert_eq!(c.style, CellStyle::Badge(BadgeVariant::Outline));
        assert_eq!(record.account_type, "credit card");
    }

    #[test]
    fn balance_styles_follow_sign() {
        let positive = cell(&account("100", None), ColumnId::Balance);
        assert_eq!(positive.text, "+100.00");
        assert_eq!(positive.style, CellStyle::Positive);

        let negative = cell(&account("-3.5", None), ColumnId::Balance);
        assert_eq!(negative.text, "-3.50");
        assert_eq!(negative.style, CellStyle::Negative);

        let zero = cell(&account("0", None), ColumnId::Balance);
        assert_eq!(zero.text, "+0.00");
        assert_eq!(zero.style, CellStyle::Positive);
    }

    #[test]
    fn unparseable_balance_degrades_to_marker() {
        let c = cell(&account("twelve", None), ColumnId::Balance);
        assert_eq!(c, Cell::invalid());
    }

    #[test]
    fn currency_is_secondary_badge() {
        let c = cell(&account("1", None), ColumnId::Currency);
        assert_eq!(c.text, "USD");
        assert_eq!(c.style, CellStyle::Badge(BadgeVariant::Secondary));
    }

    #[test]
    fn missing_metadata_uses_placeholders() {
        let record = account("1", None);
        assert_eq!(cell(&record, ColumnId::Category), Cell::placeholder());
        assert_eq!(cell(&record, ColumnId::Note), Cell::placeholder());
    }

    #[test]
    fn empty_metadata_fields_use_placeholders() {
        let record = account(
            "1",
            Some(AccountMetadata {
                note: Some(String::new()),
                category: Some(String::new()),
            }),
        );
        assert_eq!(cell(&record, ColumnId::Category).text, PLACEHOLDER);
        assert_eq!(cell(&record, ColumnId::Note).text, PLACEHOLDER);
    }

    #[test]
    fn present_metadata_is_rendered() {
        let record = account(
            "1",
            Some(AccountMetadata {
                note: Some("Reimbursed monthly".to_string()),
                category: Some("operations".to_string()),
            }),
        );
        let category = cell(&record, ColumnId::Category);
        assert_eq!(category.text, "operations");
        assert_eq!(category.style, CellStyle::Badge(BadgeVariant::Default));

        let note = cell(&record, ColumnId::Note);
        assert_eq!(note.text, "Reimbursed monthly");
        assert_eq!(note.style, CellStyle::Muted);
    }

    #[test]
    fn render_row_covers_every_column() {
        assert_eq!(render_row(&account("1", None)).len(), COLUMNS.len());
    }

    #[test]
    fn capitalize_leaves_tail_untouched() {
        assert_eq!(capitalize_words("asset"), "Asset");
        assert_eq!(capitalize_words("ASSET"), "ASSET");
        assert_eq!(capitalize_words("  two  words"), "  Two  Words");
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("équité"), "Équité");
    }
}
