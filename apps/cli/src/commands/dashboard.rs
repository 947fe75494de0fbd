//! # Dashboard View
//!
//! Today's headline numbers, the latest sales and the low-stock list.

use kirana_core::reports;

use crate::context::Context;
use crate::error::CliResult;

/// Number of recent sales shown on the dashboard.
const RECENT_SALES: usize = 5;

pub fn run(ctx: &Context) -> CliResult<()> {
    let data = ctx.store.load();
    let summary = reports::daily_summary(&data, ctx.today);

    println!("{} - {}", ctx.t("dashboard.title"), ctx.t("dashboard.subtitle"));
    println!();
    println!("  {:<22} {}", ctx.t("dashboard.todaySales"), summary.sales);
    println!("  {:<22} {}", ctx.t("dashboard.todayPurchases"), summary.purchases);
    println!("  {:<22} {}", ctx.t("dashboard.todayProfit"), summary.profit);
    println!("  {:<22} {}", ctx.t("dashboard.lowStock"), summary.low_stock_items);
    println!(
        "  {:<22} {}",
        ctx.t("dashboard.totalCredit"),
        reports::outstanding_credit(&data)
    );
    println!(
        "  {:<22} {}",
        ctx.t("dashboard.inventoryValue"),
        reports::inventory_value(&data)
    );

    println!();
    println!("{}:", ctx.t("dashboard.recentSales"));
    let recent = reports::recent_sales(&data.sales, RECENT_SALES);
    if recent.is_empty() {
        println!("  {}", ctx.t("dashboard.noSales"));
    } else {
        for sale in recent {
            println!(
                "  {}  {:<24} x{:<5} {}",
                sale.date, sale.product_name, sale.quantity, sale.total_amount
            );
        }
    }

    let low = reports::low_stock_products(&data.products);
    if !low.is_empty() {
        println!();
        println!("{}:", ctx.t("dashboard.lowStockAlerts"));
        for product in low {
            println!(
                "  {:<24} {} {} (min {})",
                product.name, product.stock, product.unit, product.min_stock
            );
        }
    }

    Ok(())
}
