//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! `DiscountRate` used by promotional pricing.
//!
//! ## Why Integer Money?
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                │
//! │                                                            │
//! │  In floating point:                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!              │
//! │                                                            │
//! │  OUR SOLUTION: Integer Cents                               │
//! │    $10.00 is 1000 cents; 1000 / 2 = 500 cents, exactly     │
//! │    Where division loses a cent, we KNOW and document it    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let line = price * 3;                       // $32.97
//! let total = line + Money::from_cents(500);  // $37.97
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of two valid amounts stays representable
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support plus total ordering, so prices can be
///   compared and sorted directly
///
/// Every monetary value in the system (unit prices, line totals, order
/// totals) flows through this type; nothing in the core touches floats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (invalid as a price).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Half of this amount, rounding down to the whole cent.
    ///
    /// Used by the second-unit-half-price promotion. An odd amount loses
    /// half a cent per discounted unit; intentional, documented precision
    /// loss in the same spirit as splitting $10.00 three ways.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(100).half().cents(), 50);
    /// assert_eq!(Money::from_cents(99).half().cents(), 49);
    /// ```
    #[inline]
    pub const fn half(&self) -> Self {
        Money(self.0 / 2)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Implementation
    /// Integer math with rounding: discount = `(amount * bps + 5000) / 10000`
    /// (the +5000 rounds the half-cent), computed in i128 to rule out
    /// overflow on large line totals.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::{DiscountRate, Money};
    ///
    /// let line = Money::from_cents(200);
    /// let discounted = line.apply_discount(DiscountRate::from_percent(30));
    /// assert_eq!(discounted.cents(), 140);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let discount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount as i64)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. 3000 bps = 30%. Integer bps keep the
/// discount math exact for any whole- or hundredth-percent rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a whole percentage (30 → 30%).
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        DiscountRate(percent * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable `$D.CC` format.
///
/// Consumed verbatim by the CLI menu listing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity (line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_half() {
        assert_eq!(Money::from_cents(100).half().cents(), 50);
        // Odd amounts round down: documented precision loss.
        assert_eq!(Money::from_cents(99).half().cents(), 49);
        assert_eq!(Money::from_cents(1).half().cents(), 0);
    }

    #[test]
    fn test_apply_discount() {
        // $100.00 at 10% off = $90.00
        let subtotal = Money::from_cents(10000);
        assert_eq!(subtotal.apply_discount(DiscountRate::from_percent(10)).cents(), 9000);

        // 200 cents at 30% off = 140 cents, exactly
        let line = Money::from_cents(200);
        assert_eq!(line.apply_discount(DiscountRate::from_percent(30)).cents(), 140);

        // Half-cent discounts round up against the seller:
        // 99 * 50% = 49.5 → 50 off → 49 remains
        let odd = Money::from_cents(99);
        assert_eq!(odd.apply_discount(DiscountRate::from_percent(50)).cents(), 49);
    }

    #[test]
    fn test_discount_rate_conversions() {
        let rate = DiscountRate::from_percent(30);
        assert_eq!(rate.bps(), 3000);
        assert!((rate.percentage() - 30.0).abs() < f64::EPSILON);

        let fine = DiscountRate::from_bps(825);
        assert!((fine.percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
