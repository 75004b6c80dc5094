// SPDX-License-Identifier: MPL-2.0
//! Signed balance parsing and display formatting.

/// Number of digits shown after the decimal point.
pub const BALANCE_DECIMALS: usize = 2;

/// Credit/debit classification of a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSign {
    /// Zero or above.
    NonNegative,
    /// Strictly below zero.
    Negative,
}

impl BalanceSign {
    /// Prefix shown before the magnitude.
    #[must_use]
    pub fn prefix(self) -> char {
        match self {
            BalanceSign::NonNegative => '+',
            BalanceSign::Negative => '-',
        }
    }
}

/// A balance parsed from its textual wire form.
///
/// The value is always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance(f64);

impl Balance {
    /// Parses a decimal string such as `"100"`, `"-3.5"` or `" 0.125 "`.
    ///
    /// Returns `None` for empty input, trailing garbage, `NaN` and infinities.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let value: f64 = raw.trim().parse().ok()?;
        value.is_finite().then_some(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Negative zero counts as non-negative.
    #[must_use]
    pub fn sign(self) -> BalanceSign {
        if self.0 < 0.0 {
            BalanceSign::Negative
        } else {
            BalanceSign::NonNegative
        }
    }

    /// Absolute value with exactly two decimals, e.g. `3.50`.
    ///
    /// Rounds half away from zero on the exact binary value, so `0.125`
    /// (exactly representable) becomes `0.13` while `1.005` (stored just
    /// below the midpoint) becomes `1.00`.
    #[must_use]
    pub fn magnitude(self) -> String {
        let abs = self.0.abs();
        match round_up_tie(abs) {
            Some(rounded) => format!("{:.*}", BALANCE_DECIMALS, rounded),
            None => format!("{:.*}", BALANCE_DECIMALS, abs),
        }
    }

    /// Sign prefix followed by the magnitude, e.g. `-3.50`.
    #[must_use]
    pub fn display(self) -> String {
        format!("{}{}", self.sign().prefix(), self.magnitude())
    }
}

/// Scale at which the last shown digit becomes the units digit, doubled so
/// midpoints land on odd integers.
const TIE_SCALE: f64 = 200.0;

/// Returns the next value up when `abs` sits exactly halfway between two
/// representable two-decimal values.
///
/// `std` formatting breaks such ties to even; balances break them upward.
fn round_up_tie(abs: f64) -> Option<f64> {
    let doubled = (abs * TIE_SCALE).round();
    // Fused multiply-add is exact, so zero means `abs * 200` is an integer.
    let exact = abs.mul_add(TIE_SCALE, -doubled) == 0.0;
    let is_midpoint = exact && doubled % 2.0 == 1.0;
    is_midpoint.then(|| (doubled + 1.0) / TIE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(raw: &str) -> Option<String> {
        Balance::parse(raw).map(Balance::display)
    }

    #[test]
    fn integers_get_two_decimals() {
        assert_eq!(display("100").as_deref(), Some("+100.00"));
    }

    #[test]
    fn negative_values_keep_minus_prefix() {
        assert_eq!(display("-3.5").as_deref(), Some("-3.50"));
    }

    #[test]
    fn zero_is_non_negative() {
        assert_eq!(display("0").as_deref(), Some("+0.00"));
        assert_eq!(display("-0").as_deref(), Some("+0.00"));
    }

    #[test]
    fn extra_precision_is_rounded() {
        assert_eq!(display("12.3456").as_deref(), Some("+12.35"));
        assert_eq!(display("-0.001").as_deref(), Some("-0.00"));
    }

    #[test]
    fn exact_midpoints_round_away_from_zero() {
        assert_eq!(display("0.125").as_deref(), Some("+0.13"));
        assert_eq!(display("-0.125").as_deref(), Some("-0.13"));
        assert_eq!(display("2.625").as_deref(), Some("+2.63"));
        assert_eq!(display("0.375").as_deref(), Some("+0.38"));
        assert_eq!(display("-10.875").as_deref(), Some("-10.88"));
    }

    #[test]
    fn near_midpoints_follow_the_stored_value() {
        // 1.005 and 2.675 are stored slightly below the midpoint.
        assert_eq!(display("1.005").as_deref(), Some("+1.00"));
        assert_eq!(display("2.675").as_deref(), Some("+2.67"));
        // 8.345 is stored slightly above it.
        assert_eq!(display("8.345").as_deref(), Some("+8.35"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(display(" 7.1 ").as_deref(), Some("+7.10"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Balance::parse("").is_none());
        assert!(Balance::parse("abc").is_none());
        assert!(Balance::parse("12abc").is_none());
        assert!(Balance::parse("NaN").is_none());
        assert!(Balance::parse("inf").is_none());
        assert!(Balance::parse("1e400").is_none());
    }

    #[test]
    fn sign_classification() {
        assert_eq!(
            Balance::parse("-1").map(Balance::sign),
            Some(BalanceSign::Negative)
        );
        assert_eq!(
            Balance::parse("1").map(Balance::sign),
            Some(BalanceSign::NonNegative)
        );
    }
}
