//! # Validation Module
//!
//! Input validation rules for Kirana Khata.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: CLI argument parsing (clap)                               │
//! │  ├── Type validation (numbers, dates, payment type)                 │
//! │  └── Immediate feedback before anything is loaded                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE, called by the ledger reducer                 │
//! │  ├── Required fields, positive quantities/amounts                   │
//! │  └── A failure discards the whole command                           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (product or customer).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use kirana_core::validation::validate_name;
///
/// assert!(validate_name("name", "Basmati Rice 5kg").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a purchase/sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_QUANTITY (9999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price entered on a form.
///
/// ## Rules
/// - Must be non-negative (zero is allowed, e.g. giveaway items)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an udhar repayment amount.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Overpayment past the outstanding balance is deliberately NOT
///   rejected; the balance simply goes negative
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
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
        assert!(validate_name("name", "Basmati Rice").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(9999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(10000).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("cost price", Money::zero()).is_ok());
        assert!(validate_price("cost price", Money::from_rupees(50)).is_ok());
        assert!(validate_price("cost price", Money::from_rupees(-1)).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(Money::from_rupees(30)).is_ok());
        assert!(validate_payment_amount(Money::zero()).is_err());
        assert!(validate_payment_amount(Money::from_rupees(-5)).is_err());
    }
}
