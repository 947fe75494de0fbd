//! # Domain Types
//!
//! Core domain types for the Kirana Khata ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │   Product     │   │   Purchase    │   │     Sale      │         │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │         │
//! │  │  id           │   │  id           │   │  id           │         │
//! │  │  stock        │   │  product_id   │   │  product_id   │         │
//! │  │  cost_price   │   │  quantity     │   │  customer_id? │         │
//! │  │  sell_price   │   │  total_cost   │   │  total_amount │         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! │                                                                     │
//! │  ┌───────────────┐   ┌─────────────────┐   ┌───────────────┐       │
//! │  │   Customer    │   │ CustomerPayment │   │   StoreData   │       │
//! │  │  ───────────  │   │  ─────────────  │   │  ───────────  │       │
//! │  │  total_credit │   │  amount         │   │  products     │       │
//! │  │  paid_amount  │   │  date           │   │  purchases    │       │
//! │  │  payments[]   │   │  notes?         │   │  sales        │       │
//! │  └───────────────┘   └─────────────────┘   │  customers    │       │
//! │                                            └───────────────┘       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Purchases and sales carry a `product_name` (and sales a
//! `customer_name`) copied at creation time. Reports deliberately show
//! the name as of transaction time, so these are never re-joined
//! against the live product/customer lists.
//!
//! ## Serialization
//! All fields serialize in camelCase so the persisted JSON document
//! keeps the original on-disk layout (`costPrice`, `totalAmount`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product tracked in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form category label ("Grains", "Dairy", ...).
    pub category: String,

    /// Unit label shown next to quantities ("pcs", "kg", "ltr").
    pub unit: String,

    /// Current cost per unit. Overwritten by every purchase of this
    /// product (global price update, not scoped to the purchase).
    pub cost_price: Money,

    /// Selling price per unit.
    pub sell_price: Money,

    /// Current on-hand quantity. Soft invariant: stays >= 0; the
    /// purchase-delete path floors at zero, the purchase-edit reversal
    /// does not.
    pub stock: i64,

    /// Low-stock alert threshold.
    pub min_stock: i64,
}

impl Product {
    /// Checks whether stock has fallen to the alert threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Stock valued at the current cost price.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.cost_price.multiply_quantity(self.stock)
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// A stock purchase from a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,

    /// The purchased product. May dangle after a product delete.
    pub product_id: String,

    /// Product name at time of purchase (frozen).
    pub product_name: String,

    /// Supplier name; empty means a general/unknown supplier.
    pub supplier_name: String,

    pub quantity: i64,

    /// Cost per unit paid on this purchase.
    pub cost_per_unit: Money,

    /// quantity × cost_per_unit, computed when the record is created.
    pub total_cost: Money,

    pub date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Payment Type
// =============================================================================

/// How a sale was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Paid in full at the counter.
    Cash,
    /// Added to the customer's udhar balance.
    Credit,
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentType::Cash => write!(f, "cash"),
            PaymentType::Credit => write!(f, "credit"),
        }
    }
}

impl std::str::FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentType::Cash),
            "credit" | "udhar" => Ok(PaymentType::Credit),
            other => Err(format!(
                "Unknown payment type: '{}'. Valid options: cash, credit",
                other
            )),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale. Sales have no edit or delete path; a mistaken
/// sale is corrected by a compensating entry, never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,

    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub product_name: String,

    /// Customer reference; present for all credit sales and optionally
    /// for cash sales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Customer name at time of sale (frozen).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    pub quantity: i64,

    /// Unit sell price at time of sale (frozen).
    pub sell_price: Money,

    /// quantity × sell_price, computed when the record is created.
    pub total_amount: Money,

    pub payment_type: PaymentType,

    pub date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Customer
// =============================================================================

/// One repayment against a customer's udhar balance. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayment {
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A customer with a running credit (udhar) account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,

    pub name: String,

    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_alt: Option<String>,

    /// Lifetime credit extended. Increased by credit sales; an edit may
    /// overwrite it from the opening-balance field (input-trust).
    pub total_credit: Money,

    /// Lifetime repayments received.
    pub paid_amount: Money,

    /// Repayment log, oldest first.
    #[serde(default)]
    pub payments: Vec<CustomerPayment>,
}

impl Customer {
    /// Outstanding udhar balance. Always derived, never stored.
    #[inline]
    pub fn balance(&self) -> Money {
        self.total_credit - self.paid_amount
    }
}

// =============================================================================
// Store Data
// =============================================================================

/// The aggregate root: the entire persisted state of the shop, and the
/// unit of every update. Mutated only through [`crate::ledger::Command`]
/// applied by [`crate::ledger`]'s reducer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl StoreData {
    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Looks up a purchase by id.
    pub fn purchase(&self, id: &str) -> Option<&Purchase> {
        self.purchases.iter().find(|p| p.id == id)
    }
}

// =============================================================================
// Daily Summary
// =============================================================================

/// The dashboard's headline numbers for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Total sold today.
    pub sales: Money,
    /// Total purchased today.
    pub purchases: Money,
    /// Today's profit at current cost prices.
    pub profit: Money,
    /// Products at or below their alert threshold.
    pub low_stock_items: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_balance_is_derived() {
        let customer = Customer {
            id: "c1".to_string(),
            name: "Sita".to_string(),
            phone: "9841000000".to_string(),
            phone_alt: None,
            total_credit: Money::from_rupees(100),
            paid_amount: Money::from_rupees(20),
            payments: Vec::new(),
        };
        assert_eq!(customer.balance(), Money::from_rupees(80));
    }

    #[test]
    fn test_payment_type_parsing() {
        assert_eq!("cash".parse::<PaymentType>().unwrap(), PaymentType::Cash);
        assert_eq!("Credit".parse::<PaymentType>().unwrap(), PaymentType::Credit);
        assert_eq!("udhar".parse::<PaymentType>().unwrap(), PaymentType::Credit);
        assert!("card".parse::<PaymentType>().is_err());
    }

    #[test]
    fn test_payment_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentType::Credit).unwrap(),
            "\"credit\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentType>("\"cash\"").unwrap(),
            PaymentType::Cash
        );
    }

    #[test]
    fn test_store_data_serializes_camel_case() {
        let data = StoreData {
            products: vec![Product {
                id: "p1".to_string(),
                name: "Rice".to_string(),
                category: "Grains".to_string(),
                unit: "kg".to_string(),
                cost_price: Money::from_rupees(5),
                sell_price: Money::from_rupees(8),
                stock: 10,
                min_stock: 5,
            }],
            ..StoreData::default()
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"costPrice\""));
        assert!(json.contains("\"sellPrice\""));
        assert!(json.contains("\"minStock\""));
        assert!(json.contains("\"purchases\":[]"));
    }

    #[test]
    fn test_store_data_deserializes_missing_lists() {
        // Old or hand-edited documents may omit empty lists entirely
        let data: StoreData = serde_json::from_str("{\"products\":[]}").unwrap();
        assert!(data.sales.is_empty());
        assert!(data.customers.is_empty());
    }

    #[test]
    fn test_low_stock() {
        let product = Product {
            id: "p1".to_string(),
            name: "Salt".to_string(),
            category: String::new(),
            unit: "pcs".to_string(),
            cost_price: Money::from_rupees(10),
            sell_price: Money::from_rupees(15),
            stock: 5,
            min_stock: 5,
        };
        assert!(product.is_low_stock());
        assert_eq!(product.stock_value(), Money::from_rupees(50));
    }
}
