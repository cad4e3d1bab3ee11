//! Monetary amounts in UAE dirhams.
//!
//! Amounts are held in fils (1/100 AED) so sums and line totals stay exact.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// ISO 4217 code printed next to every amount on a delivery note.
pub const CURRENCY_CODE: &str = "AED";

/// An AED amount stored as a signed number of fils.
///
/// Negative amounts are representable on purpose: a negative unit price is a
/// validation failure on the item, not an unrepresentable value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_fils(fils: i64) -> Self {
        Self(fils)
    }

    /// Whole dirhams, e.g. `Money::from_aed(10)` is `10.00`.
    pub const fn from_aed(aed: i64) -> Self {
        Self(aed.saturating_mul(100))
    }

    pub const fn fils(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Line total for `quantity` units at this price.
    ///
    /// Clamps to `i64::MIN`/`i64::MAX` fils instead of overflowing. Use
    /// [`Money::checked_times`] to detect the clamp.
    pub const fn times(self, quantity: i64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    /// Line total, or `None` if it does not fit in an `i64` of fils.
    pub const fn checked_times(self, quantity: i64) -> Option<Self> {
        match self.0.checked_mul(quantity) {
            Some(fils) => Some(Self(fils)),
            None => None,
        }
    }

    pub const fn checked_add(self, rhs: Money) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(fils) => Some(Self(fils)),
            None => None,
        }
    }
}

/// Saturating, like [`Money::times`].
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Fixed two-decimal rendering (`26.25`, `-0.50`).
///
/// Honors width and alignment flags, so `{:>14}` right-aligns the amount in a
/// table column. Do not pass a precision flag: it truncates the text.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let rendered = format!("{sign}{}.{:02}", abs / 100, abs % 100);
        f.pad(&rendered)
    }
}

/// Parses decimal AED text with at most two fractional digits
/// (`"26.25"`, `"10"`, `"-1.5"`).
impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(DomainError::invalid_amount(format!("'{s}' has no digits")));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_amount(format!("'{s}' is not a decimal number")));
        }
        if frac.len() > 2 {
            return Err(DomainError::invalid_amount(format!(
                "'{s}' has more than two decimal places"
            )));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| DomainError::invalid_amount(format!("'{s}' is out of range")))?
        };
        let frac_fils: i64 = match frac.len() {
            0 => 0,
            1 => i64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => i64::from(frac.as_bytes()[0] - b'0') * 10 + i64::from(frac.as_bytes()[1] - b'0'),
        };

        let fils = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac_fils))
            .ok_or_else(|| DomainError::invalid_amount(format!("'{s}' is out of range")))?;

        Ok(Self(if negative { -fils } else { fils }))
    }
}
