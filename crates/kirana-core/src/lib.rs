//! # kirana-core: Pure Business Logic for Kirana Khata
//!
//! This crate is the **heart** of Kirana Khata. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Kirana Khata Architecture                       │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    CLI (apps/cli)                           │   │
//! │  │   dashboard ─ inventory ─ purchases ─ sales ─ udhar ─ ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │ Command / snapshot               │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ kirana-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────┐  │   │
//! │  │  │  types  │ │ ledger  │ │ search  │ │ reports │ │ i18n │  │   │
//! │  │  │ Product │ │ Command │ │ keyword │ │ summary │ │ en/ne│  │   │
//! │  │  │  Sale   │ │ reducer │ │ filters │ │ profit  │ │ t()  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO CLOCK • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                kirana-store (persistence)                   │   │
//! │  │        one JSON document, CSV export, app config            │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Purchase, Sale, Customer, StoreData)
//! - [`money`] - Money type with integer paisa arithmetic (no floating point!)
//! - [`ledger`] - The Command enum and the single reducer
//! - [`search`] - Keyword and date-range filters for the history views
//! - [`reports`] - Dashboard summary, time frames, movement history
//! - [`i18n`] - English/Nepali translation lookup
//! - [`error`] - Domain error types
//! - [`validation`] - Form-level validation rules
//!
//! ## Design Principles
//!
//! 1. **One reducer**: every mutation is a typed [`ledger::Command`]
//!    applied by `StoreData::apply`, all-or-nothing
//! 2. **No I/O**: persistence lives in kirana-store, the clock in the CLI
//! 3. **Integer Money**: rupee amounts are paisa (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kirana_core::ledger::{Command, ProductForm};
//! use kirana_core::money::Money;
//! use kirana_core::types::StoreData;
//!
//! let mut data = StoreData::default();
//! data.apply(Command::AddProduct(ProductForm {
//!     name: "Basmati Rice".to_string(),
//!     category: "Grains".to_string(),
//!     unit: "kg".to_string(),
//!     cost_price: Money::from_rupees(5),
//!     sell_price: Money::from_rupees(8),
//!     stock: 10,
//!     min_stock: 5,
//! }))?;
//!
//! assert_eq!(data.products.len(), 1);
//! # Ok::<(), kirana_core::error::LedgerError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod i18n;
pub mod ledger;
pub mod money;
pub mod reports;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kirana_core::Money` instead of
// `use kirana_core::money::Money`

pub use error::{LedgerError, ValidationError};
pub use i18n::Language;
pub use ledger::Command;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single purchase or sale line.
///
/// Guards against typo-sized entries (e.g. 10000 instead of 10) on a
/// terminal with no visual confirmation step.
pub const MAX_QUANTITY: i64 = 9999;
