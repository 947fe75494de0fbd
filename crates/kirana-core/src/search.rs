//! # Search & Filter Module
//!
//! Keyword search and date-range filtering for the history views.
//!
//! ## Matching Rule
//! The query is split on whitespace into independent keyword tokens. A
//! record matches only if EVERY token appears as a case-insensitive
//! substring of the concatenation of its searchable fields, so
//! "rice hari" finds purchases of Rice from Hari Traders regardless of
//! token order.

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{PaymentType, Product, Purchase, Sale};

// =============================================================================
// Keyword Matching
// =============================================================================

/// True when every whitespace-separated token of `query` occurs in
/// `content` (both lowercased). An empty query matches everything.
fn matches_keywords(content: &str, query: &str) -> bool {
    let content = content.to_lowercase();
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|keyword| content.contains(&keyword))
}

/// Inclusive date-range check; an open bound always passes.
fn in_date_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

fn sale_search_content(sale: &Sale) -> String {
    format!(
        "{} {} {} {} {} {}",
        sale.product_name,
        sale.customer_name.as_deref().unwrap_or(""),
        sale.notes.as_deref().unwrap_or(""),
        sale.date,
        sale.payment_type,
        sale.total_amount,
    )
}

fn purchase_search_content(purchase: &Purchase) -> String {
    format!(
        "{} {} {} {} {} {}",
        purchase.product_name,
        purchase.supplier_name,
        purchase.notes.as_deref().unwrap_or(""),
        purchase.date,
        purchase.total_cost,
        purchase.quantity,
    )
}

// =============================================================================
// Sale Filter
// =============================================================================

/// Filter state of the sales history view.
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    pub query: String,
    pub payment_type: Option<PaymentType>,
    pub customer_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Applies the filter and returns matches newest-first.
pub fn filter_sales<'a>(sales: &'a [Sale], filter: &SaleFilter) -> Vec<&'a Sale> {
    let mut matched: Vec<&Sale> = sales
        .iter()
        .filter(|sale| {
            matches_keywords(&sale_search_content(sale), &filter.query)
                && filter
                    .payment_type
                    .map_or(true, |pt| sale.payment_type == pt)
                && filter
                    .customer_id
                    .as_deref()
                    .map_or(true, |id| sale.customer_id.as_deref() == Some(id))
                && in_date_range(sale.date, filter.date_from, filter.date_to)
        })
        .collect();
    matched.reverse();
    matched
}

/// Total amount of a filtered sale list (the header line).
pub fn sales_total(sales: &[&Sale]) -> Money {
    sales.iter().map(|s| s.total_amount).sum()
}

// =============================================================================
// Purchase Filter
// =============================================================================

/// Filter state of the purchase history view.
#[derive(Debug, Clone, Default)]
pub struct PurchaseFilter {
    pub query: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Applies the filter and returns matches newest-first.
pub fn filter_purchases<'a>(
    purchases: &'a [Purchase],
    filter: &PurchaseFilter,
) -> Vec<&'a Purchase> {
    let mut matched: Vec<&Purchase> = purchases
        .iter()
        .filter(|purchase| {
            matches_keywords(&purchase_search_content(purchase), &filter.query)
                && in_date_range(purchase.date, filter.date_from, filter.date_to)
        })
        .collect();
    matched.reverse();
    matched
}

/// Total cost of a filtered purchase list.
pub fn purchases_total(purchases: &[&Purchase]) -> Money {
    purchases.iter().map(|p| p.total_cost).sum()
}

// =============================================================================
// Product Search
// =============================================================================

/// Inventory search: term contained in name or category.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term) || p.category.to_lowercase().contains(&term)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sale(id: &str, product: &str, customer: Option<&str>, pt: PaymentType, d: &str) -> Sale {
        Sale {
            id: id.to_string(),
            product_id: "p1".to_string(),
            product_name: product.to_string(),
            customer_id: customer.map(str::to_string),
            customer_name: customer.map(|c| format!("Name {}", c)),
            quantity: 2,
            sell_price: Money::from_rupees(8),
            total_amount: Money::from_rupees(16),
            payment_type: pt,
            date: date(d),
            notes: Some("monthly bill".to_string()),
        }
    }

    fn purchase(id: &str, product: &str, supplier: &str, d: &str) -> Purchase {
        Purchase {
            id: id.to_string(),
            product_id: "p1".to_string(),
            product_name: product.to_string(),
            supplier_name: supplier.to_string(),
            quantity: 5,
            cost_per_unit: Money::from_rupees(5),
            total_cost: Money::from_rupees(25),
            date: date(d),
            notes: None,
        }
    }

    #[test]
    fn test_every_keyword_must_match() {
        let sales = vec![
            sale("s1", "Rice", None, PaymentType::Cash, "2024-06-01"),
            sale("s2", "Lentils", None, PaymentType::Cash, "2024-06-01"),
        ];

        let filter = SaleFilter {
            query: "rice cash".to_string(),
            ..SaleFilter::default()
        };
        let matched = filter_sales(&sales, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "s1");

        // One missing keyword fails the whole record
        let filter = SaleFilter {
            query: "rice credit".to_string(),
            ..SaleFilter::default()
        };
        assert!(filter_sales(&sales, &filter).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_notes() {
        let sales = vec![sale("s1", "Rice", None, PaymentType::Cash, "2024-06-01")];
        let filter = SaleFilter {
            query: "MONTHLY".to_string(),
            ..SaleFilter::default()
        };
        assert_eq!(filter_sales(&sales, &filter).len(), 1);
    }

    #[test]
    fn test_results_are_newest_first() {
        let sales = vec![
            sale("s1", "Rice", None, PaymentType::Cash, "2024-06-01"),
            sale("s2", "Rice", None, PaymentType::Cash, "2024-06-02"),
        ];
        let matched = filter_sales(&sales, &SaleFilter::default());
        assert_eq!(matched[0].id, "s2");
        assert_eq!(matched[1].id, "s1");
    }

    #[test]
    fn test_payment_and_customer_filters() {
        let sales = vec![
            sale("s1", "Rice", Some("c1"), PaymentType::Credit, "2024-06-01"),
            sale("s2", "Rice", Some("c2"), PaymentType::Credit, "2024-06-01"),
            sale("s3", "Rice", None, PaymentType::Cash, "2024-06-01"),
        ];

        let filter = SaleFilter {
            payment_type: Some(PaymentType::Credit),
            customer_id: Some("c1".to_string()),
            ..SaleFilter::default()
        };
        let matched = filter_sales(&sales, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "s1");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let purchases = vec![
            purchase("b1", "Rice", "Hari Traders", "2024-06-01"),
            purchase("b2", "Rice", "Hari Traders", "2024-06-05"),
            purchase("b3", "Rice", "Hari Traders", "2024-06-09"),
        ];

        let filter = PurchaseFilter {
            date_from: Some(date("2024-06-01")),
            date_to: Some(date("2024-06-05")),
            ..PurchaseFilter::default()
        };
        let matched = filter_purchases(&purchases, &filter);
        assert_eq!(matched.len(), 2);
        assert_eq!(purchases_total(&matched), Money::from_rupees(50));
    }

    #[test]
    fn test_supplier_keyword_matches_purchases() {
        let purchases = vec![
            purchase("b1", "Rice", "Hari Traders", "2024-06-01"),
            purchase("b2", "Rice", "Gita Suppliers", "2024-06-01"),
        ];
        let filter = PurchaseFilter {
            query: "hari".to_string(),
            ..PurchaseFilter::default()
        };
        assert_eq!(filter_purchases(&purchases, &filter).len(), 1);
    }

    #[test]
    fn test_filter_products_by_name_or_category() {
        let products = vec![
            Product {
                id: "p1".to_string(),
                name: "Basmati Rice".to_string(),
                category: "Grains".to_string(),
                unit: "kg".to_string(),
                cost_price: Money::zero(),
                sell_price: Money::zero(),
                stock: 0,
                min_stock: 0,
            },
            Product {
                id: "p2".to_string(),
                name: "Milk".to_string(),
                category: "Dairy".to_string(),
                unit: "ltr".to_string(),
                cost_price: Money::zero(),
                sell_price: Money::zero(),
                stock: 0,
                min_stock: 0,
            },
        ];

        assert_eq!(filter_products(&products, "rice").len(), 1);
        assert_eq!(filter_products(&products, "dairy").len(), 1);
        assert_eq!(filter_products(&products, "").len(), 2);
    }

    #[test]
    fn test_sales_total() {
        let sales = vec![
            sale("s1", "Rice", None, PaymentType::Cash, "2024-06-01"),
            sale("s2", "Rice", None, PaymentType::Cash, "2024-06-02"),
        ];
        let matched = filter_sales(&sales, &SaleFilter::default());
        assert_eq!(sales_total(&matched), Money::from_rupees(32));
    }
}
