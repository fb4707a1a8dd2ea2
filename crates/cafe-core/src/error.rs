//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                           │
//! │  ├── CoreError        - Billing precondition violations                 │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  cafe-store errors (separate crate)                                     │
//! │  └── StoreError       - Counter / receipt file failures                 │
//! │                                                                         │
//! │  cafe-cli errors                                                        │
//! │  └── AppError         - What ends the session                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, quantity, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core billing errors.
///
/// These are precondition violations: the console layer is expected to
/// filter them out before an order reaches the calculator.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order line names an item the menu does not carry.
    ///
    /// ## When This Occurs
    /// - An order built against one menu is billed against another
    /// - Input validation upstream was skipped
    #[error("Item not on menu: {0}")]
    ItemNotOnMenu(String),

    /// Billing was requested for an order without lines.
    #[error("Order has no items")]
    EmptyOrder,

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} of {item} exceeds maximum allowed ({max})")]
    QuantityTooLarge {
        item: String,
        requested: u64,
        max: u32,
    },

    /// A line total, the subtotal or the grand total does not fit in
    /// `i64` paise.
    ///
    /// ## When This Occurs
    /// - A menu file lists an absurdly large price
    #[error("Bill amount is too large to compute")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of console input and menu definitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., letters in a quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same item listed twice on a menu).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
