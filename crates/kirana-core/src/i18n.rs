//! # Translation Map
//!
//! Static key→string lookup for the two UI languages.
//!
//! ## Lookup Rule
//! A dotted-path key ("nav.udhar") is resolved against the active
//! language's table. An unresolved key returns the path itself, which
//! serves as both the production fallback and the missing-translation
//! signal (an English-looking "sales.thFoo" in the output means a key
//! is absent from the table).
//!
//! Tables are sorted by key so lookup is a binary search; a test
//! asserts sortedness and en/ne key parity.

use serde::{Deserialize, Serialize};

// =============================================================================
// Language
// =============================================================================

/// The active UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Nepali (नेपाली).
    Ne,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ne => write!(f, "ne"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ne" | "nepali" => Ok(Language::Ne),
            other => Err(format!(
                "Unknown language: '{}'. Valid options: en, ne",
                other
            )),
        }
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Resolves a dotted-path key for the given language. Unknown keys
/// come back unchanged.
pub fn translate(lang: Language, path: &str) -> &str {
    let table = match lang {
        Language::En => EN,
        Language::Ne => NE,
    };
    match table.binary_search_by(|(key, _)| (*key).cmp(path)) {
        Ok(idx) => table[idx].1,
        Err(_) => path,
    }
}

// =============================================================================
// Tables
// =============================================================================
// Keep both tables sorted by key and with identical key sets; the
// tests below enforce it.

static EN: &[(&str, &str)] = &[
    ("common.admin", "Admin"),
    ("common.rs", "Rs"),
    ("common.welcome", "Welcome"),
    ("dashboard.inventoryValue", "Inventory Value"),
    ("dashboard.lowStock", "Low Stock Items"),
    ("dashboard.lowStockAlerts", "Low Stock Alerts"),
    ("dashboard.noSales", "No sales recorded yet"),
    ("dashboard.recentSales", "Recent Sales"),
    ("dashboard.subtitle", "Today's shop overview"),
    ("dashboard.title", "Dashboard"),
    ("dashboard.todayProfit", "Today's Profit"),
    ("dashboard.todayPurchases", "Today's Purchases"),
    ("dashboard.todaySales", "Today's Sales"),
    ("dashboard.totalCredit", "Total Udhar"),
    ("inventory.category", "Category"),
    ("inventory.costPrice", "Cost Price"),
    ("inventory.history", "Stock History"),
    ("inventory.itemName", "Item Name"),
    ("inventory.lowStockTag", "LOW"),
    ("inventory.minStock", "Min Stock"),
    ("inventory.noProducts", "No products found"),
    ("inventory.sellPrice", "Selling Price"),
    ("inventory.stock", "Stock"),
    ("inventory.subtitle", "Products and stock levels"),
    ("inventory.title", "Inventory"),
    ("inventory.unit", "Unit"),
    ("nav.dashboard", "Dashboard"),
    ("nav.inventory", "Inventory"),
    ("nav.purchases", "Purchases"),
    ("nav.reports", "Reports"),
    ("nav.sales", "Sales"),
    ("nav.udhar", "Udhar Khata"),
    ("purchases.matchesFound", "records found"),
    ("purchases.noPurchases", "No purchase records"),
    ("purchases.subtitle", "Stock purchases from suppliers"),
    ("purchases.thCostUnit", "Cost/Unit"),
    ("purchases.thDate", "Date"),
    ("purchases.thNotes", "Notes"),
    ("purchases.thProduct", "Product"),
    ("purchases.thQty", "Qty"),
    ("purchases.thSupplier", "Supplier"),
    ("purchases.thTotal", "Total"),
    ("purchases.title", "Purchases"),
    ("purchases.totalFiltered", "Filtered Total"),
    ("reports.all", "All Time"),
    ("reports.day", "Today"),
    ("reports.exported", "Exported"),
    ("reports.month", "This Month"),
    ("reports.subtitle", "Sales, purchases and profit"),
    ("reports.title", "Reports"),
    ("reports.totalProfit", "Total Profit"),
    ("reports.totalPurchases", "Total Purchases"),
    ("reports.totalSales", "Total Sales"),
    ("reports.week", "This Week"),
    ("sales.matchesFound", "records found"),
    ("sales.noSales", "No sales records"),
    ("sales.subtitle", "Sales history"),
    ("sales.thCustomer", "Customer"),
    ("sales.thDate", "Date"),
    ("sales.thNotes", "Notes"),
    ("sales.thPayment", "Payment"),
    ("sales.thPrice", "Price"),
    ("sales.thProduct", "Product"),
    ("sales.thQty", "Qty"),
    ("sales.thTotal", "Total"),
    ("sales.title", "Sales"),
    ("sales.totalFiltered", "Filtered Total"),
    ("udhar.balance", "Balance"),
    (
        "udhar.deleteConfirm",
        "Delete this customer and all their sales records?",
    ),
    ("udhar.noCustomers", "No customers yet"),
    ("udhar.paidAmount", "Paid"),
    ("udhar.payments", "Payment History"),
    ("udhar.subtitle", "Customer credit accounts"),
    ("udhar.title", "Udhar Khata"),
    ("udhar.totalCredit", "Total Credit"),
];

static NE: &[(&str, &str)] = &[
    ("common.admin", "व्यवस्थापक"),
    ("common.rs", "रु"),
    ("common.welcome", "स्वागत छ"),
    ("dashboard.inventoryValue", "मौज्दात मूल्य"),
    ("dashboard.lowStock", "न्यून मौज्दात"),
    ("dashboard.lowStockAlerts", "न्यून मौज्दात सूचना"),
    ("dashboard.noSales", "अहिलेसम्म बिक्री छैन"),
    ("dashboard.recentSales", "पछिल्ला बिक्रीहरू"),
    ("dashboard.subtitle", "आजको पसल स्थिति"),
    ("dashboard.title", "ड्यासबोर्ड"),
    ("dashboard.todayProfit", "आजको नाफा"),
    ("dashboard.todayPurchases", "आजको खरिद"),
    ("dashboard.todaySales", "आजको बिक्री"),
    ("dashboard.totalCredit", "कुल उधारो"),
    ("inventory.category", "वर्ग"),
    ("inventory.costPrice", "लागत मूल्य"),
    ("inventory.history", "मौज्दात इतिहास"),
    ("inventory.itemName", "सामानको नाम"),
    ("inventory.lowStockTag", "न्यून"),
    ("inventory.minStock", "न्यूनतम मौज्दात"),
    ("inventory.noProducts", "कुनै सामान भेटिएन"),
    ("inventory.sellPrice", "बिक्री मूल्य"),
    ("inventory.stock", "मौज्दात"),
    ("inventory.subtitle", "सामान र मौज्दात व्यवस्थापन"),
    ("inventory.title", "सामान सूची"),
    ("inventory.unit", "एकाइ"),
    ("nav.dashboard", "ड्यासबोर्ड"),
    ("nav.inventory", "सामान सूची"),
    ("nav.purchases", "खरिद"),
    ("nav.reports", "रिपोर्ट"),
    ("nav.sales", "बिक्री"),
    ("nav.udhar", "उधारो खाता"),
    ("purchases.matchesFound", "रेकर्ड भेटियो"),
    ("purchases.noPurchases", "कुनै खरिद रेकर्ड छैन"),
    ("purchases.subtitle", "आपूर्तिकर्ताबाट गरिएको खरिद"),
    ("purchases.thCostUnit", "प्रति एकाइ लागत"),
    ("purchases.thDate", "मिति"),
    ("purchases.thNotes", "टिप्पणी"),
    ("purchases.thProduct", "सामान"),
    ("purchases.thQty", "परिमाण"),
    ("purchases.thSupplier", "आपूर्तिकर्ता"),
    ("purchases.thTotal", "जम्मा"),
    ("purchases.title", "खरिद"),
    ("purchases.totalFiltered", "छानिएको जम्मा"),
    ("reports.all", "सबै"),
    ("reports.day", "आज"),
    ("reports.exported", "निर्यात गरियो"),
    ("reports.month", "यो महिना"),
    ("reports.subtitle", "बिक्री, खरिद र नाफा सारांश"),
    ("reports.title", "रिपोर्ट"),
    ("reports.totalProfit", "कुल नाफा"),
    ("reports.totalPurchases", "कुल खरिद"),
    ("reports.totalSales", "कुल बिक्री"),
    ("reports.week", "यो हप्ता"),
    ("sales.matchesFound", "रेकर्ड भेटियो"),
    ("sales.noSales", "कुनै बिक्री रेकर्ड छैन"),
    ("sales.subtitle", "बिक्री इतिहास"),
    ("sales.thCustomer", "ग्राहक"),
    ("sales.thDate", "मिति"),
    ("sales.thNotes", "टिप्पणी"),
    ("sales.thPayment", "भुक्तानी"),
    ("sales.thPrice", "मूल्य"),
    ("sales.thProduct", "सामान"),
    ("sales.thQty", "परिमाण"),
    ("sales.thTotal", "जम्मा"),
    ("sales.title", "बिक्री"),
    ("sales.totalFiltered", "छानिएको जम्मा"),
    ("udhar.balance", "बाँकी रकम"),
    (
        "udhar.deleteConfirm",
        "यो ग्राहक र निजका सबै बिक्री रेकर्ड हटाउने हो?",
    ),
    ("udhar.noCustomers", "कुनै ग्राहक छैन"),
    ("udhar.paidAmount", "तिरेको रकम"),
    ("udhar.payments", "भुक्तानी इतिहास"),
    ("udhar.subtitle", "ग्राहक उधारो खाता"),
    ("udhar.title", "उधारो खाता"),
    ("udhar.totalCredit", "कुल उधारो"),
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(translate(Language::En, "nav.udhar"), "Udhar Khata");
        assert_eq!(translate(Language::Ne, "nav.udhar"), "उधारो खाता");
        assert_eq!(translate(Language::Ne, "common.rs"), "रु");
    }

    #[test]
    fn test_unresolved_key_falls_back_to_path() {
        assert_eq!(translate(Language::En, "nav.doesNotExist"), "nav.doesNotExist");
        assert_eq!(translate(Language::Ne, ""), "");
    }

    #[test]
    fn test_tables_are_sorted_for_binary_search() {
        for table in [EN, NE] {
            for pair in table.windows(2) {
                assert!(
                    pair[0].0 < pair[1].0,
                    "table out of order near '{}'",
                    pair[1].0
                );
            }
        }
    }

    #[test]
    fn test_tables_have_identical_keys() {
        assert_eq!(EN.len(), NE.len());
        for (en, ne) in EN.iter().zip(NE.iter()) {
            assert_eq!(en.0, ne.0);
        }
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("Nepali".parse::<Language>().unwrap(), Language::Ne);
        assert!("fr".parse::<Language>().is_err());
    }
}
