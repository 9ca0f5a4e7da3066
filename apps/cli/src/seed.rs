//! # Seed Inventory
//!
//! Builds the initial stock of inventory the menu starts with: a few
//! finite-stock products, an unlimited license, and a capped shipping line,
//! with promotions shared where it makes sense.

use std::sync::Arc;

use shopfront_core::{Money, Product, Promotion, Store};

/// The opening catalog.
///
/// Construction of the seed products cannot fail (the inputs are
/// compile-time constants that satisfy every validation rule), so the
/// `expect`s here are startup assertions rather than error handling.
pub fn initial_store() -> Store {
    let mut mac = Product::new("MacBook Air M2", Money::from_cents(145_000), 100)
        .expect("seed product is valid");
    let mut bose = Product::new("Bose QuietComfort Earbuds", Money::from_cents(25_000), 500)
        .expect("seed product is valid");
    let pixel = Product::new("Google Pixel 7", Money::from_cents(50_000), 250)
        .expect("seed product is valid");
    let mut windows_license = Product::new_unlimited("Windows License", Money::from_cents(12_500))
        .expect("seed product is valid");
    let shipping = Product::new_capped("Shipping", Money::from_cents(1_000), 250, 1)
        .expect("seed product is valid");

    mac.set_promotion(Some(Arc::new(Promotion::second_unit_half_price(
        "Second Half price!",
    ))));
    bose.set_promotion(Some(Arc::new(Promotion::third_unit_free("Third One Free!"))));
    windows_license.set_promotion(Some(Arc::new(Promotion::percent_off("30% off!", 30))));

    Store::new(vec![mac, bose, pixel, windows_license, shipping])
}
