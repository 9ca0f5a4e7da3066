//! # Products
//!
//! Inventory items: identity, price, stock state, active flag, and an
//! optional attached promotion.
//!
//! ## Stock Policies
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Stock Policies                        │
//! │                                                            │
//! │  Stocked     finite quantity, consumed by purchases,       │
//! │              auto-deactivates at zero                      │
//! │                                                            │
//! │  Unlimited   no finite inventory (services, licenses);     │
//! │              nominal quantity pinned at 0 for display,     │
//! │              purchases never consume stock                 │
//! │                                                            │
//! │  Capped      finite stock like Stocked, plus an advisory   │
//! │              per-order maximum enforced by the caller at   │
//! │              cart-building time, NOT by `buy`              │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rather than a type per variant, the policies are a value on one
//! `Product` type, with `buy`, the active flag and the display line
//! branching on the policy.
//!
//! ## Dual-Key Identity
//! Every product has:
//! - `id`: UUID v4 - immutable, used for catalog membership checks
//! - `name`: human-readable, identity-ish but not unique-enforced

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation;

// =============================================================================
// Stock Policy
// =============================================================================

/// How a product's inventory behaves under purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum StockPolicy {
    /// Finite stock, decremented by purchases.
    Stocked,
    /// No finite inventory constraint; never decremented.
    Unlimited,
    /// Finite stock plus a per-order-line purchase cap.
    Capped { maximum: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the store.
///
/// ## Invariants
/// - `quantity >= 0` at all times
/// - A mutation that drives finite stock to 0 deactivates the product;
///   `activate`/`deactivate` remain explicit overrides on top of that
/// - The promotion is shared (`Arc`), never owned: attaching the same rule
///   to several products costs one allocation total
///
/// ## Comparison vs Identity
/// `Product` deliberately implements neither `PartialEq` nor `PartialOrd`.
/// Callers sorting by price use [`Product::cmp_by_price`]; catalog
/// membership is an `id()` check (see `Store::find`). Conflating the two
/// into one equality operator was an explicit mistake to avoid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    id: String,

    /// Display name shown in catalog listings.
    name: String,

    /// Unit price in cents.
    price: Money,

    /// Current stock level. Pinned at 0 for unlimited-stock products.
    quantity: i64,

    /// Whether the product appears in listings and can be ordered.
    active: bool,

    /// Stock semantics under purchase.
    stock: StockPolicy,

    /// Optional promotional pricing rule, swappable at runtime.
    promotion: Option<Arc<Promotion>>,

    /// When the product was created.
    created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with finite stock.
    ///
    /// Fails with [`CoreError::Validation`] when the name is empty (or over
    /// the length cap), the price is negative, or the quantity is negative.
    /// The product starts active iff `quantity > 0`.
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Self::with_policy(name.into(), price, quantity, StockPolicy::Stocked)
    }

    /// Creates a product with no finite inventory (a service or license).
    ///
    /// The nominal quantity is fixed at 0 and the product is always active;
    /// purchases never consume stock.
    pub fn new_unlimited(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let mut product = Self::with_policy(name.into(), price, 0, StockPolicy::Unlimited)?;
        product.active = true;
        Ok(product)
    }

    /// Creates a finite-stock product with a per-order purchase cap.
    ///
    /// The cap is advisory metadata surfaced through
    /// [`Product::max_per_order`]; `buy` itself never checks it. Fails like
    /// [`Product::new`], plus when `maximum <= 0`.
    pub fn new_capped(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        validation::validate_maximum(maximum)?;
        Self::with_policy(name.into(), price, quantity, StockPolicy::Capped { maximum })
    }

    fn with_policy(name: String, price: Money, quantity: i64, stock: StockPolicy) -> CoreResult<Self> {
        validation::validate_name(&name)?;
        validation::validate_price(price)?;
        validation::validate_initial_quantity(quantity)?;

        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            quantity,
            active: quantity > 0,
            stock,
            promotion: None,
            created_at: Utc::now(),
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The immutable catalog identity of this product.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock level (nominal 0 for unlimited-stock products).
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock
    }

    pub fn promotion(&self) -> Option<&Arc<Promotion>> {
        self.promotion.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The largest quantity purchasable in a single order line, if capped.
    ///
    /// Pre-flight capability for cart builders: the cap is enforced during
    /// line-item entry, before any stock mutation, never inside `buy`.
    pub fn max_per_order(&self) -> Option<i64> {
        match self.stock {
            StockPolicy::Capped { maximum } => Some(maximum),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Active Flag
    // -------------------------------------------------------------------------

    /// Whether the product is eligible to be listed and ordered.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Explicitly (re)activates the product, independent of quantity.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Explicitly deactivates the product, independent of quantity.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    // -------------------------------------------------------------------------
    // Quantity Override
    // -------------------------------------------------------------------------

    /// Sets the stock level directly, clamping and syncing the active flag.
    ///
    /// A resulting quantity of 0 or less is forced to 0 and deactivates the
    /// product; anything positive reactivates it. This is an explicit
    /// override path distinct from [`Product::buy`]; both are supported.
    pub fn set_quantity(&mut self, quantity: i64) {
        if quantity <= 0 {
            self.quantity = 0;
            self.deactivate();
        } else {
            self.quantity = quantity;
            self.activate();
        }
    }

    // -------------------------------------------------------------------------
    // Promotion Attachment
    // -------------------------------------------------------------------------

    /// Attaches, replaces, or clears the promotion on this product.
    ///
    /// At most one promotion at a time; no history is kept.
    pub fn set_promotion(&mut self, promotion: Option<Arc<Promotion>>) {
        self.promotion = promotion;
    }

    // -------------------------------------------------------------------------
    // Purchase
    // -------------------------------------------------------------------------

    /// Buys `quantity` units, returning the total line price.
    ///
    /// ## Behavior
    /// - Fails with [`CoreError::InvalidQuantity`] when `quantity <= 0`, or
    ///   (finite stock only) when it exceeds the current stock. Stock is
    ///   untouched on failure.
    /// - The total is the attached promotion's price when present, else
    ///   `price × quantity`.
    /// - Finite stock is decremented; hitting 0 deactivates the product.
    ///   Unlimited stock is never mutated.
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        if quantity <= 0 {
            return Err(self.invalid_quantity(quantity));
        }

        match self.stock {
            StockPolicy::Unlimited => {}
            StockPolicy::Stocked | StockPolicy::Capped { .. } => {
                if quantity > self.quantity {
                    return Err(self.invalid_quantity(quantity));
                }
                self.quantity -= quantity;
                if self.quantity == 0 {
                    self.deactivate();
                }
            }
        }

        Ok(self.price_for(quantity))
    }

    /// Prices `quantity` units without mutating any state.
    ///
    /// Promotion-aware: delegates to the attached rule when present.
    pub fn price_for(&self, quantity: i64) -> Money {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price * quantity,
        }
    }

    fn invalid_quantity(&self, requested: i64) -> CoreError {
        CoreError::InvalidQuantity {
            name: self.name.clone(),
            available: self.quantity,
            requested,
        }
    }

    // -------------------------------------------------------------------------
    // Price Ordering
    // -------------------------------------------------------------------------

    /// Compares two products by price only.
    ///
    /// This is the sorting/filtering comparator; it says nothing about
    /// identity. Two distinct products with equal prices compare as
    /// `Ordering::Equal` here while remaining distinct catalog members.
    pub fn cmp_by_price(&self, other: &Product) -> Ordering {
        self.price.cmp(&other.price)
    }
}

// =============================================================================
// Display
// =============================================================================

/// One human-readable catalog line, consumed verbatim by the CLI menu.
///
/// ```text
/// MacBook Air M2, Price: $1450.00, Quantity: 100, Promotion: Second Half price!
/// Windows License, Price: $125.00, Quantity: Unlimited, Promotion: 30% off!
/// Shipping, Price: $10.00, Quantity: 250, Limited to 1 per order!, Promotion: None
/// ```
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Price: {}, ", self.name, self.price)?;

        match self.stock {
            StockPolicy::Unlimited => write!(f, "Quantity: Unlimited, ")?,
            StockPolicy::Stocked => write!(f, "Quantity: {}, ", self.quantity)?,
            StockPolicy::Capped { maximum } => write!(
                f,
                "Quantity: {}, Limited to {} per order!, ",
                self.quantity, maximum
            )?,
        }

        match &self.promotion {
            Some(promotion) => write!(f, "Promotion: {}", promotion.label()),
            None => write!(f, "Promotion: None"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
