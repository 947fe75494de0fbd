//! # CLI Commands Module
//!
//! One module per view of the original front-end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (shared helpers, exports)
//! ├── dashboard.rs  ◄─── Today's overview
//! ├── inventory.rs  ◄─── Product CRUD + stock history
//! ├── purchases.rs  ◄─── Purchase records (add/edit/delete/list)
//! ├── sales.rs      ◄─── Sales records (add/list only)
//! ├── customers.rs  ◄─── Udhar accounts and repayments
//! └── reports.rs    ◄─── Time-framed totals and CSV export
//! ```
//!
//! ## Mutation Flow
//! Every mutating subcommand follows the same shape:
//! load → `StoreData::apply(Command)` → save → one success line.
//! An `Err` from the reducer aborts before the save, so a rejected
//! command never touches the document.

pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod purchases;
pub mod reports;
pub mod sales;

use std::io::{self, BufRead, Write};

use kirana_core::types::{Customer, Product, Purchase};

use crate::error::{CliError, CliResult};

// =============================================================================
// Confirmation Prompt
// =============================================================================

/// Asks a destructive-action question on the terminal.
///
/// Returns true on "y"/"yes" (case-insensitive); `--yes` bypasses the
/// prompt entirely. There is no undo after confirmation.
pub fn confirm(prompt: &str, assume_yes: bool) -> CliResult<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

// =============================================================================
// Record Resolution
// =============================================================================
// The original picked records from dropdowns; on a terminal the user
// types an id, a unique id prefix, or a unique name instead.

fn resolve<'a, T>(
    kind: &'static str,
    needle: &str,
    records: &'a [T],
    id: impl Fn(&T) -> &str,
    name: impl Fn(&T) -> &str,
) -> CliResult<&'a T> {
    // Exact id wins outright
    if let Some(record) = records.iter().find(|r| id(r) == needle) {
        return Ok(record);
    }

    let prefix: Vec<&T> = records.iter().filter(|r| id(r).starts_with(needle)).collect();
    if let [record] = prefix[..] {
        return Ok(record);
    }

    let lowered = needle.to_lowercase();
    let by_name: Vec<&T> = records
        .iter()
        .filter(|r| name(r).to_lowercase() == lowered)
        .collect();
    if let [record] = by_name[..] {
        return Ok(record);
    }

    let candidates: Vec<&T> = if !prefix.is_empty() { prefix } else { by_name };
    if candidates.is_empty() {
        Err(CliError::NotFound {
            kind,
            needle: needle.to_string(),
        })
    } else {
        Err(CliError::Ambiguous {
            kind,
            needle: needle.to_string(),
            candidates: candidates
                .iter()
                .map(|r| format!("{} ({})", name(r), short_id(id(r))))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Finds a product by id, unique id prefix, or unique name.
pub fn resolve_product<'a>(products: &'a [Product], needle: &str) -> CliResult<&'a Product> {
    resolve("Product", needle, products, |p| &p.id, |p| &p.name)
}

/// Finds a customer by id, unique id prefix, or unique name.
pub fn resolve_customer<'a>(customers: &'a [Customer], needle: &str) -> CliResult<&'a Customer> {
    resolve("Customer", needle, customers, |c| &c.id, |c| &c.name)
}

/// Finds a purchase record by id or unique id prefix.
pub fn resolve_purchase<'a>(purchases: &'a [Purchase], needle: &str) -> CliResult<&'a Purchase> {
    resolve(
        "Purchase",
        needle,
        purchases,
        |p| &p.id,
        |p| &p.product_name,
    )
}

/// First eight characters of a UUID, enough to reference on a terminal.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Display form of an optional notes field.
pub fn notes_cell(notes: &Option<String>) -> &str {
    notes.as_deref().unwrap_or("-")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_core::money::Money;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: String::new(),
            unit: "pcs".to_string(),
            cost_price: Money::zero(),
            sell_price: Money::zero(),
            stock: 0,
            min_stock: 0,
        }
    }

    #[test]
    fn test_resolve_by_id_prefix_and_name() {
        let products = vec![
            product("aaaa1111-0000", "Rice"),
            product("bbbb2222-0000", "Milk"),
        ];

        assert_eq!(resolve_product(&products, "aaaa1111-0000").unwrap().name, "Rice");
        assert_eq!(resolve_product(&products, "bbbb").unwrap().name, "Milk");
        assert_eq!(resolve_product(&products, "rice").unwrap().id, "aaaa1111-0000");
    }

    #[test]
    fn test_resolve_reports_missing_and_ambiguous() {
        let products = vec![product("aaaa1111", "Rice"), product("aaab2222", "Rice")];

        assert!(matches!(
            resolve_product(&products, "ghost"),
            Err(CliError::NotFound { .. })
        ));
        // Two ids share the prefix
        assert!(matches!(
            resolve_product(&products, "aaa"),
            Err(CliError::Ambiguous { .. })
        ));
        // Two products share the name
        assert!(matches!(
            resolve_product(&products, "Rice"),
            Err(CliError::Ambiguous { .. })
        ));
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("aaaa1111-2222"), "aaaa1111");
        assert_eq!(short_id("ab"), "ab");
    }
}
