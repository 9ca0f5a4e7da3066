//! # Validation Module
//!
//! Construction-input validation for shopfront-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Validation Layers                        │
//! │                                                            │
//! │  Layer 1: CLI input parsing                                │
//! │  ├── numeric parsing, menu-range checks                    │
//! │  └── immediate re-prompt on bad input                      │
//! │           │                                                │
//! │           ▼                                                │
//! │  Layer 2: THIS MODULE (product construction)               │
//! │  ├── non-empty name, length cap                            │
//! │  └── non-negative price and quantity                       │
//! │           │                                                │
//! │           ▼                                                │
//! │  Layer 3: Operation guards (Product::buy, Store::order)    │
//! │  └── stock and activity checks at mutation time            │
//! └────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_name;
///
/// assert!(validate_name("MacBook Air M2").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name(&"A".repeat(300)).is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an initial stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed; the product simply starts inactive
pub fn validate_initial_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a per-order maximum for capped products.
///
/// ## Rules
/// - Must be strictly positive; a cap of zero would make the product
///   unorderable, which is what `deactivate` is for
pub fn validate_maximum(maximum: i64) -> ValidationResult<()> {
    if maximum <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "maximum".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("MacBook Air M2").is_ok());
        assert!(validate_name("x").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_initial_quantity() {
        assert!(validate_initial_quantity(0).is_ok());
        assert!(validate_initial_quantity(100).is_ok());
        assert!(validate_initial_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_maximum() {
        assert!(validate_maximum(1).is_ok());
        assert!(validate_maximum(250).is_ok());
        assert!(validate_maximum(0).is_err());
        assert!(validate_maximum(-5).is_err());
    }
}
