//! # Reports View
//!
//! Time-framed totals and the four CSV exports. Row shaping lives
//! here (display column names, fallback labels); the encoder lives in
//! kirana-store.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use kirana_core::money::Money;
use kirana_core::reports::{self, TimeFrame};
use kirana_core::types::StoreData;
use kirana_store::export::{self, row, CsvRow};

use crate::context::Context;
use crate::error::CliResult;

#[derive(Debug, Args)]
pub struct ReportsArgs {
    /// Report window
    #[arg(long, default_value = "all")]
    pub frame: TimeFrame,
    #[command(subcommand)]
    pub command: Option<ReportsCmd>,
}

#[derive(Debug, Subcommand)]
pub enum ReportsCmd {
    /// Write one report as a CSV file
    Export {
        /// Which report to export
        what: ExportKind,
        /// Output directory (defaults to the current directory)
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportKind {
    Inventory,
    Sales,
    Purchases,
    Customers,
}

pub fn run(ctx: &Context, args: ReportsArgs) -> CliResult<()> {
    match args.command {
        Some(ReportsCmd::Export { what, out }) => export_csv(ctx, args.frame, what, &out),
        None => summary(ctx, args.frame),
    }
}

// =============================================================================
// Summary
// =============================================================================

fn summary(ctx: &Context, frame: TimeFrame) -> CliResult<()> {
    let data = ctx.store.load();
    let sales = reports::sales_in_frame(&data.sales, frame, ctx.today);
    let purchases = reports::purchases_in_frame(&data.purchases, frame, ctx.today);

    let total_sales: Money = sales.iter().map(|s| s.total_amount).sum();
    let total_purchases: Money = purchases.iter().map(|p| p.total_cost).sum();
    let total_profit = reports::total_profit(&sales, &data.products);

    println!(
        "{} - {} ({})",
        ctx.t("reports.title"),
        ctx.t("reports.subtitle"),
        ctx.t(&format!("reports.{}", frame.token())),
    );
    println!();
    println!("  {:<18} {}", ctx.t("reports.totalSales"), total_sales);
    println!("  {:<18} {}", ctx.t("reports.totalPurchases"), total_purchases);
    println!("  {:<18} {}", ctx.t("reports.totalProfit"), total_profit);
    Ok(())
}

// =============================================================================
// CSV Export
// =============================================================================

fn export_csv(ctx: &Context, frame: TimeFrame, what: ExportKind, out: &PathBuf) -> CliResult<()> {
    let data = ctx.store.load();

    let (filename, rows) = match what {
        ExportKind::Inventory => ("inventory_report.csv".to_string(), inventory_rows(&data)),
        ExportKind::Sales => (
            format!("sales_report_{}.csv", frame.token()),
            sales_rows(&data, frame, ctx),
        ),
        ExportKind::Purchases => (
            format!("purchases_report_{}.csv", frame.token()),
            purchases_rows(&data, frame, ctx),
        ),
        ExportKind::Customers => (
            "customer_credit_report.csv".to_string(),
            customers_rows(&data),
        ),
    };

    match export::write_csv(out, &filename, &rows)? {
        Some(path) => println!("{}: {}", ctx.t("reports.exported"), path.display()),
        None => println!("No records to export for this period"),
    }
    Ok(())
}

/// Plain decimal rupee cell ("24" or "50.50"), no currency label.
fn money_cell(amount: Money) -> String {
    if amount.paisa() % 100 == 0 {
        amount.rupees().to_string()
    } else {
        format!(
            "{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            amount.rupees().abs(),
            amount.paisa_part()
        )
    }
}

fn inventory_rows(data: &StoreData) -> Vec<CsvRow> {
    data.products
        .iter()
        .map(|p| {
            row(vec![
                ("Product ID", p.id.clone()),
                ("Name", p.name.clone()),
                ("Category", p.category.clone()),
                ("Unit", p.unit.clone()),
                ("Cost Price", money_cell(p.cost_price)),
                ("Selling Price", money_cell(p.sell_price)),
                ("Current Stock", p.stock.to_string()),
                ("Min Stock Alert", p.min_stock.to_string()),
            ])
        })
        .collect()
}

fn sales_rows(data: &StoreData, frame: TimeFrame, ctx: &Context) -> Vec<CsvRow> {
    reports::sales_in_frame(&data.sales, frame, ctx.today)
        .into_iter()
        .map(|s| {
            row(vec![
                ("Date", s.date.to_string()),
                ("Product", s.product_name.clone()),
                (
                    "Customer",
                    s.customer_name.clone().unwrap_or_else(|| "Walk-in".to_string()),
                ),
                ("Payment Type", s.payment_type.to_string()),
                ("Quantity", s.quantity.to_string()),
                ("Total Amount", money_cell(s.total_amount)),
                ("Notes", s.notes.clone().unwrap_or_default()),
            ])
        })
        .collect()
}

fn purchases_rows(data: &StoreData, frame: TimeFrame, ctx: &Context) -> Vec<CsvRow> {
    reports::purchases_in_frame(&data.purchases, frame, ctx.today)
        .into_iter()
        .map(|p| {
            row(vec![
                ("Date", p.date.to_string()),
                ("Product", p.product_name.clone()),
                (
                    "Supplier",
                    if p.supplier_name.is_empty() {
                        "General".to_string()
                    } else {
                        p.supplier_name.clone()
                    },
                ),
                ("Quantity", p.quantity.to_string()),
                ("Cost per Unit", money_cell(p.cost_per_unit)),
                ("Total Cost", money_cell(p.total_cost)),
                ("Notes", p.notes.clone().unwrap_or_default()),
            ])
        })
        .collect()
}

fn customers_rows(data: &StoreData) -> Vec<CsvRow> {
    data.customers
        .iter()
        .map(|c| {
            row(vec![
                ("Customer ID", c.id.clone()),
                ("Customer Name", c.name.clone()),
                ("Primary Phone", c.phone.clone()),
                ("Alternative Phone", c.phone_alt.clone().unwrap_or_default()),
                ("Total Credit Amount", money_cell(c.total_credit)),
                ("Total Paid Amount", money_cell(c.paid_amount)),
                ("Remaining Balance (Udhar)", money_cell(c.balance())),
            ])
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_cell_is_plain_decimal() {
        assert_eq!(money_cell(Money::from_rupees(24)), "24");
        assert_eq!(money_cell(Money::from_paisa(5050)), "50.50");
        assert_eq!(money_cell(Money::from_paisa(-550)), "-5.50");
        assert_eq!(money_cell(Money::zero()), "0");
    }
}
