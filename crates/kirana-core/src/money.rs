//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Paisa                                        │
//! │    Rs 10.50 is stored as 1050 paisa (i64)                           │
//! │    All ledger math is exact integer arithmetic                      │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kirana_core::money::Money;
//!
//! // Create from whole rupees or paisa
//! let price = Money::from_rupees(50);        // Rs 50.00
//! let precise = Money::from_paisa(5050);     // Rs 50.50
//!
//! // Arithmetic operations
//! let total = price.multiply_quantity(3);    // Rs 150.00
//! let sum = price + precise;                 // Rs 100.50
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount in the smallest currency unit (paisa, 1/100 Rs).
///
/// ## Design Decisions
/// - **i64 (signed)**: A customer balance can go negative on overpayment
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; persisted as a bare integer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// let price = Money::from_rupees(50);
    /// assert_eq!(price.paisa(), 5000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paisa.
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paisa portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(8);
    /// let total = unit_price.multiply_quantity(3);
    /// assert_eq!(total, Money::from_rupees(24));
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Basmati Rice, sell price Rs 8
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Sale total: Rs 24
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal rupee string ("50", "50.5", "50.50") into Money.
///
/// At most two fraction digits are accepted; a lone "." or a third
/// fraction digit is rejected.
impl std::str::FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "expected a decimal rupee amount like 50 or 50.50".to_string(),
        };

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        // "50.5" means 50 paisa-tens, not 5 paisa
        let paisa: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = rupees * 100 + paisa;
        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Whole-rupee values print without a fraction ("Rs 24"), everything
/// else with two digits ("Rs 50.50"). UI labels come from the
/// translation table; this is the plain English rendering.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.0 % 100 == 0 {
            write!(f, "{}Rs {}", sign, self.rupees().abs())
        } else {
            write!(f, "{}Rs {}.{:02}", sign, self.rupees().abs(), self.paisa_part())
        }
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Sum of an iterator of Money values.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
