//! # Store
//!
//! The catalog aggregate: owns the products, answers catalog queries, and
//! runs the multi-line order operation.
//!
//! ## Order Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Store::order(lines)                     │
//! │                                                            │
//! │  for each (product_id, quantity):                          │
//! │       │                                                    │
//! │       ├── id not in catalog? ──► InvalidOrderLine, STOP    │
//! │       │                                                    │
//! │       ├── product inactive? ───► InvalidOrderLine, STOP    │
//! │       │                                                    │
//! │       └── product.buy(quantity) ──► accumulate total       │
//! │                  │                                         │
//! │                  └── stock error? ──► propagate, STOP      │
//! │                                                            │
//! │  NO ROLLBACK: lines processed before the failing one keep  │
//! │  their stock mutations. Callers wanting all-or-nothing     │
//! │  must pre-validate (activity, caps) before submitting.     │
//! └────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, OrderLineReason};
use crate::money::Money;
use crate::product::{Product, StockPolicy};

// =============================================================================
// Order Line
// =============================================================================

/// One (product, quantity) pair within a submitted cart.
///
/// Lines reference products by catalog id rather than by reference; the
/// membership check happens inside [`Store::order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        OrderLine {
            product_id: product_id.into(),
            quantity,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// A store containing products.
///
/// ## Invariants
/// - Products keep their insertion order; menu numbering depends on it
/// - Membership identity is the product UUID; duplicate names are allowed
///   and not detected
///
/// Single-actor use only: `order`, `buy` and `set_quantity` are plain
/// read-modify-write sequences with no internal locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store with an initial catalog.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Appends a product to the catalog.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes a product by id, returning it.
    ///
    /// Fails with [`CoreError::ProductNotFound`] when the id is not in the
    /// catalog; a silent miss would hide caller bugs.
    pub fn remove_product(&mut self, id: &str) -> CoreResult<Product> {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => Ok(self.products.remove(index)),
            None => Err(CoreError::ProductNotFound { id: id.to_string() }),
        }
    }

    /// Looks up a catalog member by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Looks up a catalog member by id, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Number of products in the catalog, active or not.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total finite stock across the catalog.
    ///
    /// Unlimited-stock products are excluded from the sum: they have no
    /// meaningful finite count, and their nominal 0 is a representation
    /// detail rather than inventory. Fixed design decision.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .filter(|p| !matches!(p.stock_policy(), StockPolicy::Unlimited))
            .map(Product::quantity)
            .sum()
    }

    /// Currently-active products, in insertion order.
    ///
    /// Never yields a product whose `is_active()` is false at call time.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Validates and prices a cart, mutating stock as it goes.
    ///
    /// Per line: fails with [`CoreError::InvalidOrderLine`] when the id is
    /// unknown or the product is inactive, then delegates to
    /// [`Product::buy`] and accumulates the returned price.
    ///
    /// ## Failure Policy (no rollback)
    /// The call stops at the first failing line and returns its error;
    /// mutations from earlier lines remain applied. This matches the
    /// single-actor contract: pre-validate for all-or-nothing semantics.
    pub fn order(&mut self, lines: &[OrderLine]) -> CoreResult<Money> {
        let mut total = Money::zero();

        for line in lines {
            let product = match self.products.iter_mut().find(|p| p.id() == line.product_id) {
                Some(product) => product,
                None => {
                    return Err(CoreError::InvalidOrderLine {
                        product: line.product_id.clone(),
                        reason: OrderLineReason::NotInCatalog,
                    })
                }
            };

            if !product.is_active() {
                return Err(CoreError::InvalidOrderLine {
                    product: product.name().to_string(),
                    reason: OrderLineReason::Inactive,
                });
            }

            total += product.buy(line.quantity)?;
        }

        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promotion::Promotion;
    use std::sync::Arc;

    fn money(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    fn stocked(name: &str, cents: i64, quantity: i64) -> Product {
        Product::new(name, money(cents), quantity).unwrap()
    }

    #[test]
    fn test_order_prices_and_decrements() {
        let a = stocked("A", 10, 5);
        let id = a.id().to_string();
        let mut store = Store::new(vec![a]);

        let total = store.order(&[OrderLine::new(&id, 3)]).unwrap();
        assert_eq!(total, money(30));

        let a = store.find(&id).unwrap();
        assert_eq!(a.quantity(), 2);
        assert!(a.is_active());
    }

    #[test]
    fn test_order_accumulates_across_lines() {
        let a = stocked("A", 100, 10);
        let b = stocked("B", 250, 10);
        let (id_a, id_b) = (a.id().to_string(), b.id().to_string());
        let mut store = Store::new(vec![a, b]);

        let total = store
            .order(&[OrderLine::new(&id_a, 2), OrderLine::new(&id_b, 1)])
            .unwrap();
        assert_eq!(total, money(450));
    }

    #[test]
    fn test_order_applies_promotions() {
        let mut a = stocked("A", 100, 10);
        a.set_promotion(Some(Arc::new(Promotion::third_unit_free("Third One Free!"))));
        let id = a.id().to_string();
        let mut store = Store::new(vec![a]);

        let total = store.order(&[OrderLine::new(&id, 5)]).unwrap();
        assert_eq!(total, money(400));
    }

    #[test]
    fn test_order_with_inactive_product_fails_without_rollback() {
        let a = stocked("A", 10, 5);
        let mut b = stocked("B", 20, 5);
        b.deactivate();
        let (id_a, id_b) = (a.id().to_string(), b.id().to_string());
        let mut store = Store::new(vec![a, b]);

        let err = store
            .order(&[OrderLine::new(&id_a, 3), OrderLine::new(&id_b, 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidOrderLine {
                reason: OrderLineReason::Inactive,
                ..
            }
        ));

        // The first line's mutation stays applied.
        assert_eq!(store.find(&id_a).unwrap().quantity(), 2);
        assert_eq!(store.find(&id_b).unwrap().quantity(), 5);
    }

    #[test]
    fn test_order_with_unknown_product_fails() {
        let mut store = Store::new(vec![stocked("A", 10, 5)]);
        let err = store
            .order(&[OrderLine::new("not-an-id", 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidOrderLine {
                reason: OrderLineReason::NotInCatalog,
                ..
            }
        ));
    }

    #[test]
    fn test_order_stock_error_propagates_after_partial_mutation() {
        let a = stocked("A", 10, 5);
        let b = stocked("B", 20, 2);
        let (id_a, id_b) = (a.id().to_string(), b.id().to_string());
        let mut store = Store::new(vec![a, b]);

        let err = store
            .order(&[OrderLine::new(&id_a, 1), OrderLine::new(&id_b, 3)])
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { .. }));
        assert_eq!(store.find(&id_a).unwrap().quantity(), 4);
        assert_eq!(store.find(&id_b).unwrap().quantity(), 2);
    }

    #[test]
    fn test_order_does_not_enforce_per_order_cap() {
        // The cap is the cart builder's job; the store happily oversells it.
        let shipping = Product::new_capped("Shipping", money(1000), 250, 1).unwrap();
        let id = shipping.id().to_string();
        let mut store = Store::new(vec![shipping]);

        let total = store.order(&[OrderLine::new(&id, 3)]).unwrap();
        assert_eq!(total, money(3000));
    }

    #[test]
    fn test_active_products_filters_and_preserves_order() {
        let a = stocked("A", 10, 5);
        let mut b = stocked("B", 20, 5);
        b.deactivate();
        let c = stocked("C", 30, 5);
        let store = Store::new(vec![a, b, c]);

        let names: Vec<_> = store.active_products().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["A", "C"]);

        for p in store.active_products() {
            assert!(p.is_active());
        }
    }

    #[test]
    fn test_total_quantity_excludes_unlimited_stock() {
        let a = stocked("A", 10, 100);
        let b = stocked("B", 20, 50);
        let license = Product::new_unlimited("License", money(12_500)).unwrap();
        let store = Store::new(vec![a, b, license]);

        assert_eq!(store.total_quantity(), 150);
    }

    #[test]
    fn test_add_and_remove_product() {
        let mut store = Store::new(Vec::new());
        assert!(store.is_empty());

        let a = stocked("A", 10, 5);
        let id = a.id().to_string();
        store.add_product(a);
        assert_eq!(store.len(), 1);

        let removed = store.remove_product(&id).unwrap();
        assert_eq!(removed.name(), "A");
        assert!(store.is_empty());

        let err = store.remove_product(&id).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound { .. }));
    }
}
