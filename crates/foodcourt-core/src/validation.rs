//! # Validation Module
//!
//! Input validation for values typed at the prompt.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt (CLI)                                                 │
//! │  └── Is it a number at all?                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── typed quantity is a number in 1..=999                             │
//! │  └── names and phones usable as single-line file fields                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain (Order)                                               │
//! │  └── quantity > 0 and a line total within Money::MAX_AMOUNT            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names and phones are written one per line in `customers.txt` and the stall
//! files, so a value containing a line break would corrupt every record after
//! it. That is the main reason these validators exist.

use crate::error::{CoreError, ValidationError};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted customer name.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted phone number (digits, spaces, `+`, `-`).
pub const MAX_PHONE_LEN: usize = 20;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters
/// - No line breaks
///
/// ```rust
/// use foodcourt_core::validation::validate_customer_name;
///
/// assert_eq!(validate_customer_name("  Asha ").unwrap(), "Asha");
/// assert!(validate_customer_name("").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if name.contains(['\n', '\r']) {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must be a single line".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a phone number and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 20 characters
/// - Digits plus optional `+`, `-` and spaces; at least one digit
///
/// ```rust
/// use foodcourt_core::validation::validate_phone;
///
/// assert!(validate_phone("+91 98765-43210").is_ok());
/// assert!(validate_phone("call me").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.chars().count() > MAX_PHONE_LEN {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: MAX_PHONE_LEN,
        });
    }

    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ');
    if !allowed || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, '+' and '-'".to_string(),
        });
    }

    Ok(phone.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value: it must be positive (> 0).
///
/// Returns `CoreError` rather than `ValidationError` because the quantity rule
/// is an order invariant, not just a form check. It holds for orders read
/// back from files too, which may carry quantities above the prompt's cap.
pub fn validate_quantity(qty: i64) -> Result<(), CoreError> {
    if qty <= 0 {
        return Err(CoreError::InvalidQuantity(qty.to_string()));
    }
    Ok(())
}

/// Parses a quantity typed at the prompt.
///
/// ## Rules
/// - Must be a whole number, else [`CoreError::InvalidQuantity`]
/// - Must be positive (> 0), else [`CoreError::InvalidQuantity`]
/// - Must not exceed MAX_ITEM_QUANTITY (999), else [`CoreError::QuantityTooLarge`]
///
/// ```rust
/// use foodcourt_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
/// assert!(parse_quantity("three").is_err());
/// ```
pub fn parse_quantity(input: &str) -> Result<i64, CoreError> {
    let input = input.trim();
    let qty: i64 = input
        .parse()
        .map_err(|_| CoreError::InvalidQuantity(input.to_string()))?;

    validate_quantity(qty)?;
    if qty > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: qty,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(qty)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("Ravi Kumar").unwrap(), "Ravi Kumar");
        assert_eq!(validate_customer_name("  Meera\t").unwrap(), "Meera");

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name("two\nlines").is_err());
        assert!(validate_customer_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone("9876543210").unwrap(), "9876543210");
        assert!(validate_phone("+91 98765-43210").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("abc").is_err());
        assert!(validate_phone("+-").is_err());
        assert!(validate_phone(&"9".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1500).is_ok());

        assert!(matches!(validate_quantity(0), Err(CoreError::InvalidQuantity(ref q)) if q == "0"));
        assert!(matches!(validate_quantity(-3), Err(CoreError::InvalidQuantity(ref q)) if q == "-3"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity("999\r").unwrap(), 999);

        assert!(matches!(parse_quantity("0"), Err(CoreError::InvalidQuantity(_))));
        assert!(matches!(parse_quantity("abc"), Err(CoreError::InvalidQuantity(ref q)) if q == "abc"));
        assert!(matches!(parse_quantity(""), Err(CoreError::InvalidQuantity(_))));
        assert!(matches!(
            parse_quantity("1000"),
            Err(CoreError::QuantityTooLarge { requested: 1000, .. })
        ));
    }
}
