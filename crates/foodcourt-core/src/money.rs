//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f32 running totals:                                               │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    A sales counter summed over thousands of orders drifts.              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    Rs. 12.50 is stored as 1250. Sums are exact.                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Text Forms
//! - `Display` is for people: `Rs. 500.00`
//! - [`Money::to_amount_string`] / [`Money::parse_amount`] are for data files:
//!   `500.00`. The parser also accepts `500` and `500.5`, which is what older
//!   float-based writers produced.
//!
//! ## Usage
//! ```rust
//! use foodcourt_core::money::Money;
//!
//! let price = Money::from_rupees(350);
//! let line = price * 2;
//! assert_eq!(line.paise(), 70_000);
//! assert_eq!(line.to_string(), "Rs. 700.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences between two totals can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1250).rupees(), 12);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Menu prices are whole rupees, so catalog tables use this.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Largest amount (either sign) a data file may carry: Rs. 100 billion.
    pub const MAX_AMOUNT: Money = Money(10_000_000_000_000);

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// let large_pizza = Money::from_rupees(500);
    /// assert_eq!(large_pizza.multiply_quantity(2), Money::from_rupees(1000));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies by a quantity, or `None` if the result leaves
    /// `±MAX_AMOUNT`.
    ///
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(70).checked_multiply_quantity(3), Some(Money::from_rupees(210)));
    /// assert_eq!(Money::MAX_AMOUNT.checked_multiply_quantity(2), None);
    /// ```
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0
            .checked_mul(qty)
            .filter(|paise| paise.unsigned_abs() <= Self::MAX_AMOUNT.0.unsigned_abs())
            .map(Money)
    }

    /// Formats the amount for data files: `500.00`, `-12.05`.
    ///
    /// No currency symbol, always two decimals.
    pub fn to_amount_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }

    /// Parses an amount written by [`Money::to_amount_string`].
    ///
    /// ## Accepted Forms
    /// ```text
    /// "500"      → 50000 paise
    /// "500.5"    → 50050 paise
    /// "500.00"   → 50000 paise
    /// "-12.05"   → -1205 paise
    /// "  75.25 " → 7525 paise (surrounding whitespace ignored)
    /// ```
    ///
    /// More than two decimals, exponents, any other characters, or a value
    /// beyond [`Money::MAX_AMOUNT`] yield `None`.
    ///
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// assert_eq!(Money::parse_amount("1000.5"), Some(Money::from_paise(100_050)));
    /// assert_eq!(Money::parse_amount("Large"), None);
    /// ```
    pub fn parse_amount(text: &str) -> Option<Money> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let rupees: i64 = whole.parse().ok()?;
        let paise: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };

        let total = rupees.checked_mul(100)?.checked_add(paise)?;
        if total > Self::MAX_AMOUNT.0 {
            return None;
        }
        Some(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way receipts do: `Rs. 12.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rs. {}", self.to_amount_string())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let money = Money::from_rupees(350);
        assert_eq!(money.paise(), 35_000);
        assert_eq!(money.rupees(), 350);
        assert_eq!(money.paise_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(1250).to_string(), "Rs. 12.50");
        assert_eq!(Money::from_rupees(500).to_string(), "Rs. 500.00");
        assert_eq!(Money::from_paise(-550).to_string(), "Rs. -5.50");
        assert_eq!(Money::zero().to_string(), "Rs. 0.00");
    }

    #[test]
    fn test_amount_string() {
        assert_eq!(Money::from_rupees(1000).to_amount_string(), "1000.00");
        assert_eq!(Money::from_paise(5).to_amount_string(), "0.05");
        assert_eq!(Money::from_paise(-1205).to_amount_string(), "-12.05");
    }

    #[test]
    fn test_parse_amount_accepts_float_writer_output() {
        assert_eq!(Money::parse_amount("500"), Some(Money::from_rupees(500)));
        assert_eq!(Money::parse_amount("1000.5"), Some(Money::from_paise(100_050)));
        assert_eq!(Money::parse_amount(" 75.25\r"), Some(Money::from_paise(7525)));
        assert_eq!(Money::parse_amount("-12.05"), Some(Money::from_paise(-1205)));
    }

    #[test]
    fn test_parse_amount_rejects_labels() {
        assert_eq!(Money::parse_amount(""), None);
        assert_eq!(Money::parse_amount("Large"), None);
        assert_eq!(Money::parse_amount("7Up"), None);
        assert_eq!(Money::parse_amount("1.234"), None);
        assert_eq!(Money::parse_amount("1e3"), None);
        assert_eq!(Money::parse_amount(".5"), None);
        assert_eq!(Money::parse_amount("-"), None);
    }

    #[test]
    fn test_parse_amount_rejects_beyond_ceiling() {
        assert_eq!(Money::parse_amount("100000000000.00"), Some(Money::MAX_AMOUNT));
        assert_eq!(Money::parse_amount("100000000000.01"), None);
        assert_eq!(Money::parse_amount("90000000000000000.00"), None);
        assert_eq!(Money::parse_amount("-90000000000000000.00"), None);
    }

    #[test]
    fn test_line_total_bounds() {
        let price = Money::parse_amount("99999999999.00").unwrap();
        assert_eq!(price.checked_multiply_quantity(1), Some(price));
        assert_eq!(price.checked_multiply_quantity(2), None);
        assert_eq!(Money::from_rupees(70).checked_multiply_quantity(i64::MAX), None);

        assert_eq!(Money::from_paise(i64::MAX) + Money::from_paise(1), Money::from_paise(i64::MAX));
        assert_eq!(Money::from_paise(i64::MAX) * 2, Money::from_paise(i64::MAX));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running, Money::from_rupees(15));
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_rupees(15), Money::from_rupees(20), Money::from_rupees(40)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_rupees(75));
    }
}
