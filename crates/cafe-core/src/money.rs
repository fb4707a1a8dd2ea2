//! # Money Module
//!
//! Provides the `Money` and `Percentage` types for handling amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    540 × 0.05 = 27.000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    54000 paise × 500 bps / 10000 = 2700 paise = ₹27.00                  │
//! │    Every "round to 2 decimals" is an explicit integer rounding step     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::money::{Money, Percentage};
//!
//! let price = Money::from_rupees(120);
//! let line = price.checked_multiply_quantity(2).unwrap(); // ₹240.00
//! let gst = line.percentage_of(Percentage::from_percent(5));
//! assert_eq!(gst.paise(), 1_200);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Symbol printed in front of every amount.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (1/100 rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts are shown as negative adjustments
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serialized as the raw paise integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let price = Money::from_paise(12_050); // ₹120.50
    /// assert_eq!(price.paise(), 12_050);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Meant for literal amounts; configuration input goes through
    /// `checked_mul` on the rupee value instead.
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats the amount without the currency symbol (`120.00`).
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }

    /// Multiplies money by a quantity; `None` if the product overflows.
    ///
    /// Prices come from a user-supplied menu file, so any value up to
    /// `i64::MAX` paise can reach this point.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(40);
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_rupees(120)));
    /// assert_eq!(Money::from_paise(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(qty as i64).map(Money)
    }

    /// Adds two amounts; `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Computes `self × rate`, rounded to the nearest paisa.
    ///
    /// ## Rounding
    /// Half a paisa rounds away from zero: `(|amount × bps| + 5000) / 10000`.
    /// This is the "round to 2 decimal places" used for both the discount
    /// and the GST.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::{Money, Percentage};
    ///
    /// let after_discount = Money::from_paise(45_950);          // ₹459.50
    /// let gst = after_discount.percentage_of(Percentage::from_percent(5));
    /// // ₹22.975 → ₹22.98
    /// assert_eq!(gst.paise(), 2_298);
    /// ```
    pub fn percentage_of(&self, rate: Percentage) -> Money {
        // i128 keeps large amounts × bps from overflowing
        let scaled = self.0 as i128 * rate.bps() as i128;
        let rounded = (scaled.abs() + 5000) / 10000;
        let paise = if scaled < 0 { -rounded } else { rounded };
        Money(paise as i64)
    }
}

/// Display shows the amount with the rupee sign and two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Percentage
// =============================================================================

/// A rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10% and fractional
/// tax rates such as 2.5% stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(u32);

impl Percentage {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Creates a rate from a whole percent (`5` = 5%).
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        Percentage(percent * 100)
    }

    /// Creates a rate from a fractional percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        Percentage((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Whole-percent part, truncated (`250` bps → `2`).
    #[inline]
    pub const fn whole_percent(&self) -> u32 {
        self.0 / 100
    }
}

/// `10%`, or `8.25%` when the rate has a fractional part.
impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.whole_percent();
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
