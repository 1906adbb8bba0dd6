//! # Money Module
//!
//! Provides the `Money` type for sterling amounts and the `Rate` type for
//! percentage multipliers.
//!
//! ## Why Integer Pence?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    £25.00 = 2500 pence                                                  │
//! │    50% of 2500 = (2500 × 5000 + 5000) / 10000 = 1250 pence             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tackle_core::money::{Money, Rate};
//!
//! let rate = Money::from_pence(2500); // £25.00 a night
//! let two = rate * 2;                 // £50.00
//! let half = rate.apply_rate(Rate::HALF);
//!
//! assert_eq!(two.pence(), 5000);
//! assert_eq!(half.to_string(), "£12.50");
//! ```

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence.
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.daily_rate ──► LineQuote (first night, extra nights, penalty)
///                                   │
///                                   ▼
///                 HireQuote.total ──► HireRecord ──► EarningsReport
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ```rust
    /// use tackle_core::money::Money;
    ///
    /// let price = Money::from_pence(1500); // £15.00
    /// assert_eq!(price.pence(), 1500);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (0-99 for the non-negative amounts hires produce).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        self.0 % 100
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use tackle_core::money::Money;
    ///
    /// let day_chair = Money::from_pence(1500);
    /// assert_eq!(day_chair.multiply_quantity(2).pence(), 3000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a basis-point rate, rounding half-up to the nearest penny.
    ///
    /// ## Implementation
    /// Integer math: `(amount × bps + 5000) / 10000`. The +5000 is the
    /// half-up term (5000/10000 = 0.5).
    ///
    /// ```rust
    /// use tackle_core::money::{Money, Rate};
    ///
    /// // 50% of £0.05 = 2.5p → 3p
    /// assert_eq!(Money::from_pence(5).apply_rate(Rate::HALF).pence(), 3);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        // i128 keeps amount × bps from overflowing on large amounts
        let pence = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_pence(pence as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Sterling display: `£12.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("£{}.{:02}", self.pounds(), self.pence_part());
        // pad() so width/alignment specifiers work in report columns
        f.pad(&text)
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Rate
// =============================================================================

/// A percentage multiplier in basis points (bps).
///
/// 1 basis point = 0.01%, so 5000 bps = 50%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate(u32);

impl Rate {
    /// 100%.
    pub const FULL: Rate = Rate(10_000);

    /// 50%, used for additional nights and the late penalty.
    pub const HALF: Rate = Rate(5_000);

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1250);
        assert_eq!(money.pence(), 1250);
        assert_eq!(money.pounds(), 12);
        assert_eq!(money.pence_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pence(68250).to_string(), "£682.50");
        assert_eq!(Money::from_pence(500).to_string(), "£5.00");
        assert_eq!(Money::from_pence(5).to_string(), "£0.05");
        assert_eq!(Money::zero().to_string(), "£0.00");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:<8}|", Money::from_pence(1250)), "£12.50  |");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(500);

        assert_eq!((a + b).pence(), 1500);
        assert_eq!((a * 3).pence(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.pence(), 1500);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_pence(3000), Money::from_pence(5000)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.pence(), 8000);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_apply_rate_exact() {
        assert_eq!(Money::from_pence(2500).apply_rate(Rate::HALF).pence(), 1250);
        assert_eq!(Money::from_pence(2500).apply_rate(Rate::FULL).pence(), 2500);
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // 2.5p → 3p, 0.5p → 1p
        assert_eq!(Money::from_pence(5).apply_rate(Rate::HALF).pence(), 3);
        assert_eq!(Money::from_pence(1).apply_rate(Rate::HALF).pence(), 1);
        // 33.33% of 100p = 33.33p → 33p
        assert_eq!(Money::from_pence(100).apply_rate(Rate::from_bps(3333)).pence(), 33);
    }
}
