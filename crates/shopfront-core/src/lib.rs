//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It models a small retail
//! inventory as pure, synchronous business logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Shopfront Architecture                     │
//! │                                                                │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                   CLI (apps/cli)                         │  │
//! │  │   Menu loop ──► Cart building ──► Order submission       │  │
//! │  └────────────────────────────┬─────────────────────────────┘  │
//! │                               │                                │
//! │  ┌────────────────────────────▼─────────────────────────────┐  │
//! │  │            ★ shopfront-core (THIS CRATE) ★               │  │
//! │  │                                                          │  │
//! │  │  ┌─────────┐ ┌───────────┐ ┌─────────┐ ┌─────────────┐  │  │
//! │  │  │  money  │ │ promotion │ │ product │ │    store    │  │  │
//! │  │  │  Money  │ │ pricing   │ │  stock  │ │  catalog +  │  │  │
//! │  │  │  rates  │ │ formulas  │ │  state  │ │  ordering   │  │  │
//! │  │  └─────────┘ └───────────┘ └─────────┘ └─────────────┘  │  │
//! │  │                                                          │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS     │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`promotion`] - Stateless promotional pricing rules
//! - [`product`] - Inventory items with stock policies
//! - [`store`] - The catalog aggregate and the order operation
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Promotion pricing is deterministic - same input =
//!    same output, no hidden state
//! 2. **No I/O**: Terminal, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Single Actor**: Operations are synchronous read-modify-write steps;
//!    a concurrent host must add its own locking around the store
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use shopfront_core::{Money, Product, Promotion, Store, OrderLine};
//!
//! let mut laptop = Product::new("MacBook Air M2", Money::from_cents(145_000), 100).unwrap();
//! laptop.set_promotion(Some(Arc::new(Promotion::second_unit_half_price(
//!     "Second Half price!",
//! ))));
//!
//! let id = laptop.id().to_string();
//! let mut store = Store::new(vec![laptop]);
//!
//! let total = store
//!     .order(&[OrderLine::new(&id, 2)])
//!     .unwrap();
//! // One full-price unit + one half-price unit.
//! assert_eq!(total, Money::from_cents(217_500));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`.

pub use error::{CoreError, CoreResult, OrderLineReason, ValidationError};
pub use money::{DiscountRate, Money};
pub use product::{Product, StockPolicy};
pub use promotion::Promotion;
pub use store::{OrderLine, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// ## Business Reason
/// Keeps menu listings and receipts to a single readable line. Anything
/// longer is almost certainly pasted garbage rather than a real name.
pub const MAX_NAME_LEN: usize = 200;
