//! # Reports Module
//!
//! Read-only derivations over the ledger: the dashboard summary,
//! time-framed report totals, per-product stock movement history.
//!
//! ## Profit Approximation
//! Per-sale profit is `total_amount - product.cost_price * quantity`
//! using the CURRENT cost price, not the cost price at sale time. The
//! ledger does not track historical cost, so older sales drift as new
//! purchases reprice the product. Known approximation, kept as-is.
//!
//! "Today" is always a parameter; this crate never reads the clock.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{DailySummary, Product, Purchase, Sale, StoreData};

// =============================================================================
// Time Frames
// =============================================================================

/// Report window selected on the reports view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Day,
    Week,
    Month,
    #[default]
    All,
}

impl TimeFrame {
    /// The inclusive lower date bound for this frame, or None for All.
    ///
    /// Day keeps today only; Week reaches back seven days; Month one
    /// calendar month.
    pub fn threshold(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeFrame::Day => Some(today),
            TimeFrame::Week => Some(today - chrono::Duration::days(7)),
            TimeFrame::Month => Some(today - Months::new(1)),
            TimeFrame::All => None,
        }
    }

    /// The token used in export filenames (`sales_report_week.csv`).
    pub fn token(&self) -> &'static str {
        match self {
            TimeFrame::Day => "day",
            TimeFrame::Week => "week",
            TimeFrame::Month => "month",
            TimeFrame::All => "all",
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(TimeFrame::Day),
            "week" => Ok(TimeFrame::Week),
            "month" => Ok(TimeFrame::Month),
            "all" => Ok(TimeFrame::All),
            other => Err(format!(
                "Unknown time frame: '{}'. Valid options: day, week, month, all",
                other
            )),
        }
    }
}

/// Sales on or after the frame threshold.
pub fn sales_in_frame<'a>(sales: &'a [Sale], frame: TimeFrame, today: NaiveDate) -> Vec<&'a Sale> {
    match frame.threshold(today) {
        Some(threshold) => sales.iter().filter(|s| s.date >= threshold).collect(),
        None => sales.iter().collect(),
    }
}

/// Purchases on or after the frame threshold.
pub fn purchases_in_frame<'a>(
    purchases: &'a [Purchase],
    frame: TimeFrame,
    today: NaiveDate,
) -> Vec<&'a Purchase> {
    match frame.threshold(today) {
        Some(threshold) => purchases.iter().filter(|p| p.date >= threshold).collect(),
        None => purchases.iter().collect(),
    }
}

// =============================================================================
// Profit & Totals
// =============================================================================

/// Profit of one sale at the product's current cost price. A missing
/// (deleted) product counts as zero cost.
pub fn sale_profit(sale: &Sale, products: &[Product]) -> Money {
    let cost = products
        .iter()
        .find(|p| p.id == sale.product_id)
        .map(|p| p.cost_price.multiply_quantity(sale.quantity))
        .unwrap_or_else(Money::zero);
    sale.total_amount - cost
}

/// Combined profit of a slice of sales.
pub fn total_profit(sales: &[&Sale], products: &[Product]) -> Money {
    sales.iter().map(|s| sale_profit(s, products)).sum()
}

/// Lifetime udhar outstanding across all customers.
pub fn outstanding_credit(data: &StoreData) -> Money {
    data.customers.iter().map(|c| c.balance()).sum()
}

/// Stock on hand valued at current cost prices.
pub fn inventory_value(data: &StoreData) -> Money {
    data.products.iter().map(|p| p.stock_value()).sum()
}

/// Products at or below their alert threshold.
pub fn low_stock_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// The dashboard headline numbers for `today`.
pub fn daily_summary(data: &StoreData, today: NaiveDate) -> DailySummary {
    let today_sales: Vec<&Sale> = data.sales.iter().filter(|s| s.date == today).collect();
    let sales = today_sales.iter().map(|s| s.total_amount).sum();
    let purchases = data
        .purchases
        .iter()
        .filter(|p| p.date == today)
        .map(|p| p.total_cost)
        .sum();
    let profit = total_profit(&today_sales, &data.products);
    let low_stock_items = low_stock_products(&data.products).len();

    DailySummary {
        sales,
        purchases,
        profit,
        low_stock_items,
    }
}

/// The most recent sales, newest first (dashboard panel).
pub fn recent_sales(sales: &[Sale], limit: usize) -> Vec<&Sale> {
    sales.iter().rev().take(limit).collect()
}

// =============================================================================
// Stock Movement History
// =============================================================================

/// Direction of one stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    /// Stock in from a supplier.
    Purchase,
    /// Stock out to a customer.
    Sale,
}

/// One row of a product's movement history.
#[derive(Debug, Clone, PartialEq)]
pub struct StockMovement {
    pub id: String,
    pub date: NaiveDate,
    pub kind: MovementKind,
    pub quantity: i64,
    /// Supplier or customer; defaults for anonymous counterparties.
    pub entity: String,
    /// Cost per unit for purchases, sell price for sales.
    pub price: Money,
}

/// Merges a product's purchases and sales into one chronological
/// history, newest first. The sort is stable, so same-day purchases
/// stay ahead of same-day sales.
pub fn product_movements(data: &StoreData, product_id: &str) -> Vec<StockMovement> {
    let purchases = data
        .purchases
        .iter()
        .filter(|p| p.product_id == product_id)
        .map(|p| StockMovement {
            id: p.id.clone(),
            date: p.date,
            kind: MovementKind::Purchase,
            quantity: p.quantity,
            entity: if p.supplier_name.is_empty() {
                "General Supplier".to_string()
            } else {
                p.supplier_name.clone()
            },
            price: p.cost_per_unit,
        });

    let sales = data
        .sales
        .iter()
        .filter(|s| s.product_id == product_id)
        .map(|s| StockMovement {
            id: s.id.clone(),
            date: s.date,
            kind: MovementKind::Sale,
            quantity: s.quantity,
            entity: s
                .customer_name
                .clone()
                .unwrap_or_else(|| "Walk-in Customer".to_string()),
            price: s.sell_price,
        });

    let mut movements: Vec<StockMovement> = purchases.chain(sales).collect();
    movements.sort_by(|a, b| b.date.cmp(&a.date));
    movements
}

// =============================================================================
// Unit Tests
// =============================================================================
