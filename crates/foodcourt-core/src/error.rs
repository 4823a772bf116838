//! # Error Types
//!
//! Domain-specific error types for foodcourt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  foodcourt-core errors (this file)                                     │
//! │  ├── CoreError        - Menu/order rule violations, bad records        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  foodcourt-store errors (separate crate)                               │
//! │  └── StoreError       - File operation failures                        │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the prompt loop sees                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → logged + re-prompt     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu code outside the stall's declared range.
    ///
    /// ## When This Occurs
    /// - Selection 99 on a stall with codes 1-4
    /// - Pizza size 4 when only sizes 1-3 exist
    /// - Stall number 7 on the customer menu
    /// - `abc` typed where a menu code is expected
    #[error("Invalid {field} selection {input} (choose {min} to {max})")]
    InvalidSelection {
        field: &'static str,
        input: String,
        min: i64,
        max: i64,
    },

    /// Quantity was zero, negative, or not a number.
    #[error("Invalid quantity {0}: please enter a positive number")]
    InvalidQuantity(String),

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Price × quantity falls outside `Money::MAX_AMOUNT`.
    #[error("Line total for {quantity} x {price} is out of range")]
    LineTotalOutOfRange { quantity: i64, price: Money },

    /// A persisted record could not be decoded.
    ///
    /// ## When This Occurs
    /// - A stall file ends in the middle of an order
    /// - A count or id field is not a number
    #[error("Malformed record at field {field_index}: {reason}")]
    MalformedRecord { field_index: usize, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for the input mistakes a prompt loop recovers from by asking again.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidSelection { .. }
                | CoreError::InvalidQuantity(_)
                | CoreError::QuantityTooLarge { .. }
                | CoreError::LineTotalOutOfRange { .. }
                | CoreError::Validation(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., a phone number with letters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
