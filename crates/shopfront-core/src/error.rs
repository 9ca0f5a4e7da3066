//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Error Types                          │
//! │                                                            │
//! │  shopfront-core errors (this file)                         │
//! │  ├── CoreError        - Purchase / ordering failures       │
//! │  └── ValidationError  - Construction-input failures        │
//! │                                                            │
//! │  CLI (apps/cli)                                            │
//! │  └── catches CoreError at the menu boundary and prints     │
//! │      the message, then returns to the menu loop            │
//! │                                                            │
//! │  Flow: ValidationError → CoreError → CLI → user            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String
//! 4. The core never catches its own errors; everything propagates
//!    synchronously to the immediate caller

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations raised by purchase and
/// ordering operations. They should be caught at the application edge and
/// translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Purchase quantity is non-positive or exceeds available stock.
    ///
    /// ## When This Occurs
    /// - `buy(0)` or `buy(-n)` on any product
    /// - `buy(n)` with `n` above the current finite stock
    ///
    /// Unlimited-stock products only raise this for non-positive quantities.
    #[error("Invalid quantity for {name}: available {available}, requested {requested}")]
    InvalidQuantity {
        name: String,
        available: i64,
        requested: i64,
    },

    /// An order line references a product that cannot be sold.
    ///
    /// ## When This Occurs
    /// - The line's product id is not in the store's catalog
    /// - The product exists but is inactive
    ///
    /// ## Failure Policy
    /// `Store::order` stops at the first failing line. Lines already
    /// processed in the same call keep their stock mutations (no rollback);
    /// callers wanting all-or-nothing semantics must pre-validate.
    #[error("Invalid order line for {product}: {reason}")]
    InvalidOrderLine {
        product: String,
        reason: OrderLineReason,
    },

    /// Product cannot be found in the catalog.
    ///
    /// Raised by removal and lookup paths that require membership.
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Why an order line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderLineReason {
    /// The product is in the catalog but currently inactive.
    Inactive,
    /// The product id does not belong to this store.
    NotInCatalog,
}

impl std::fmt::Display for OrderLineReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderLineReason::Inactive => write!(f, "product is not active"),
            OrderLineReason::NotInCatalog => write!(f, "product is not in this store"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when construction arguments don't meet requirements.
/// Used for early validation before any product state exists.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidQuantity {
            name: "Bose QuietComfort Earbuds".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid quantity for Bose QuietComfort Earbuds: available 3, requested 5"
        );
    }

    #[test]
    fn test_order_line_messages() {
        let err = CoreError::InvalidOrderLine {
            product: "Google Pixel 7".to_string(),
            reason: OrderLineReason::Inactive,
        };
        assert_eq!(
            err.to_string(),
            "Invalid order line for Google Pixel 7: product is not active"
        );

        let err = CoreError::InvalidOrderLine {
            product: "unknown-id".to_string(),
            reason: OrderLineReason::NotInCatalog,
        };
        assert_eq!(
            err.to_string(),
            "Invalid order line for unknown-id: product is not in this store"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
