//! # Error Types
//!
//! Domain-specific error types for kirana-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  kirana-core errors (this file)                                     │
//! │  ├── LedgerError      - Command rejected by the reducer             │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  kirana-store errors (separate crate)                               │
//! │  └── StoreError       - Persistence failures                        │
//! │                                                                     │
//! │  CLI errors (in app)                                                │
//! │  └── CliError         - What the user sees on stderr                │
//! │                                                                     │
//! │  Flow: ValidationError → LedgerError → CliError → terminal          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (names, ids, quantities)
//! 3. Errors are enum variants, never String
//! 4. A rejected command leaves the store untouched

use thiserror::Error;

// =============================================================================
// Ledger Error
// =============================================================================

/// A ledger command was rejected.
///
/// Every variant means the whole command was discarded; there is no
/// partial application.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The referenced product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The referenced purchase record does not exist.
    #[error("Purchase not found: {0}")]
    PurchaseNotFound(String),

    /// The referenced customer does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// A credit sale was submitted without selecting a customer.
    #[error("A customer must be selected for credit sales")]
    CustomerRequired,

    /// Not enough stock to complete a sale.
    ///
    /// ## User Workflow
    /// ```text
    /// New sale (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available = 3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Rice", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// CLI shows: "Insufficient stock for Rice: available 3, requested 5"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any business logic runs; they map one-to-one to
/// the blocking form alerts of the original front-end.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a malformed amount or date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
