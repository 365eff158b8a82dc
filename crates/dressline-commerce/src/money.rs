//! Money type for representing monetary values.
//!
//! Prices in the boutique are whole rupees, so amounts are plain integers in
//! the currency's smallest displayed unit. All arithmetic used for totals is
//! checked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Sri Lankan rupee.
    #[default]
    LKR,
}

impl Currency {
    /// Get the currency code (e.g., "LKR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::LKR => "LKR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Whole-unit amount.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a rupee amount.
    ///
    /// ```
    /// use dressline_commerce::money::Money;
    /// assert_eq!(Money::lkr(3500).display(), "LKR 3,500");
    /// ```
    pub const fn lkr(amount: i64) -> Self {
        Self::new(amount, Currency::LKR)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Format as a display string (e.g., "LKR 14,500").
    pub fn display(&self) -> String {
        format!("{} {}", self.currency, self.display_amount())
    }

    /// Format the amount with thousands separators, without the code.
    pub fn display_amount(&self) -> String {
        group_thousands(self.amount)
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to sum an iterator of Money values.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group digits in threes with commas (`1234567` -> `1,234,567`).
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::lkr(0).display(), "LKR 0");
        assert_eq!(Money::lkr(950).display(), "LKR 950");
        assert_eq!(Money::lkr(3500).display(), "LKR 3,500");
        assert_eq!(Money::lkr(14500).display(), "LKR 14,500");
        assert_eq!(Money::lkr(1234567).display_amount(), "1,234,567");
        assert_eq!(Money::lkr(-2500).display_amount(), "-2,500");
    }

    #[test]
    fn test_money_try_add() {
        assert_eq!(Money::lkr(1000).try_add(&Money::lkr(500)), Some(Money::lkr(1500)));
        assert!(Money::lkr(i64::MAX).try_add(&Money::lkr(1)).is_none());
    }

    #[test]
    fn test_money_try_multiply_overflow() {
        assert_eq!(Money::lkr(4200).try_multiply(3), Some(Money::lkr(12600)));
        assert!(Money::lkr(i64::MAX).try_multiply(2).is_none());
    }

    #[test]
    fn test_money_try_sum() {
        let amounts = [Money::lkr(100), Money::lkr(250), Money::lkr(650)];
        assert_eq!(Money::try_sum(amounts.iter(), Currency::LKR), Some(Money::lkr(1000)));
    }
}
