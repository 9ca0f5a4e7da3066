//! # Promotions
//!
//! Stateless promotional pricing rules.
//!
//! A promotion transforms `(unit price, quantity)` into a total line price.
//! Rules hold no mutable state and are shared across any number of products
//! via `Arc`; a product never owns its promotion.
//!
//! ## Pricing Formulas
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  PercentOff(p)          total = price × qty, less p%       │
//! │                                                            │
//! │  SecondUnitHalfPrice    full = qty / 2                     │
//! │                         half = qty - full                  │
//! │                         total = full×price + half×(price/2)│
//! │                                                            │
//! │  ThirdUnitFree          charged = (qty / 3) × 2 + qty % 3  │
//! │                         total = charged × price            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the second-unit rule bills every *other* unit at half price rather
//! than literally "the second one": for an odd quantity the larger half of
//! the units is the discounted half. The formulas are the contract; keep
//! them exactly as written.

use serde::{Deserialize, Serialize};

use crate::money::{DiscountRate, Money};

// =============================================================================
// Promotion
// =============================================================================

/// A promotional pricing rule.
///
/// ## Design Notes
/// Modeled as an enum rather than a trait object: the set of rules is
/// closed, every rule is a pure function of `(price, quantity)`, and enum
/// matching keeps the pricing table in one readable place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Promotion {
    /// A flat percentage off the whole line.
    PercentOff { label: String, rate: DiscountRate },
    /// Every other unit at half price.
    SecondUnitHalfPrice { label: String },
    /// Buy 2, get 1 free: two of every full group of three are charged.
    ThirdUnitFree { label: String },
}

impl Promotion {
    /// Creates a percentage discount from a whole percent (30 → 30% off).
    pub fn percent_off(label: impl Into<String>, percent: u32) -> Self {
        Promotion::PercentOff {
            label: label.into(),
            rate: DiscountRate::from_percent(percent),
        }
    }

    /// Creates a second-unit-half-price rule.
    pub fn second_unit_half_price(label: impl Into<String>) -> Self {
        Promotion::SecondUnitHalfPrice { label: label.into() }
    }

    /// Creates a buy-2-get-1-free rule.
    pub fn third_unit_free(label: impl Into<String>) -> Self {
        Promotion::ThirdUnitFree { label: label.into() }
    }

    /// The display label, consumed verbatim by catalog listings.
    pub fn label(&self) -> &str {
        match self {
            Promotion::PercentOff { label, .. }
            | Promotion::SecondUnitHalfPrice { label }
            | Promotion::ThirdUnitFree { label } => label,
        }
    }

    /// Computes the total price for `quantity` units at `unit_price`.
    ///
    /// Pure and deterministic: same `(price, quantity)` always yields the
    /// same total, and neither the promotion nor any product state is
    /// mutated. Callers guarantee `quantity > 0` (enforced by
    /// `Product::buy`).
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Money {
        match self {
            Promotion::PercentOff { rate, .. } => {
                (unit_price * quantity).apply_discount(*rate)
            }
            Promotion::SecondUnitHalfPrice { .. } => {
                let full = quantity / 2;
                let half = quantity - full;
                unit_price * full + unit_price.half() * half
            }
            Promotion::ThirdUnitFree { .. } => {
                let charged = (quantity / 3) * 2 + quantity % 3;
                unit_price * charged
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_off() {
        // 100 cents, 30% off, 2 units: 200 - 60 = 140
        let promo = Promotion::percent_off("30% off!", 30);
        assert_eq!(promo.apply(Money::from_cents(100), 2).cents(), 140);
    }

    #[test]
    fn test_second_unit_half_price() {
        let promo = Promotion::second_unit_half_price("Second Half price!");

        // qty 3: 1 full + 2 half = 100 + 2×50 = 200
        assert_eq!(promo.apply(Money::from_cents(100), 3).cents(), 200);

        // qty 1: the single unit is the "half" remainder
        assert_eq!(promo.apply(Money::from_cents(100), 1).cents(), 50);

        // qty 4: 2 full + 2 half = 300
        assert_eq!(promo.apply(Money::from_cents(100), 4).cents(), 300);
    }

    #[test]
    fn test_third_unit_free() {
        let promo = Promotion::third_unit_free("Third One Free!");

        // qty 5: charged = (5/3)×2 + 5%3 = 2 + 2 = 4 → 400
        assert_eq!(promo.apply(Money::from_cents(100), 5).cents(), 400);

        // qty 3: charged = 2 → 200
        assert_eq!(promo.apply(Money::from_cents(100), 3).cents(), 200);

        // qty 2: no full group, both charged
        assert_eq!(promo.apply(Money::from_cents(100), 2).cents(), 200);

        // qty 6: two full groups, 4 charged
        assert_eq!(promo.apply(Money::from_cents(100), 6).cents(), 400);
    }

    #[test]
    fn test_apply_is_pure() {
        let promo = Promotion::percent_off("30% off!", 30);
        let price = Money::from_cents(1450);

        let first = promo.apply(price, 7);
        let second = promo.apply(price, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let promo = Promotion::percent_off("30% off!", 30);
        let json = serde_json::to_value(&promo).unwrap();
        assert_eq!(json["kind"], "percent_off");
        assert_eq!(json["label"], "30% off!");

        let back: Promotion = serde_json::from_value(json).unwrap();
        assert_eq!(back, promo);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Promotion::percent_off("30% off!", 30).label(), "30% off!");
        assert_eq!(
            Promotion::second_unit_half_price("Second Half price!").label(),
            "Second Half price!"
        );
        assert_eq!(
            Promotion::third_unit_free("Third One Free!").label(),
            "Third One Free!"
        );
    }
}
