//! # Purchases View
//!
//! Purchase records: add, edit, delete, and the filtered history.
//! Adding a purchase restocks the product and overwrites its cost
//! price; see the ledger module for the exact stock movements.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use kirana_core::ledger::{Command, PurchaseForm};
use kirana_core::money::Money;
use kirana_core::search::{self, PurchaseFilter};

use super::{confirm, notes_cell, resolve_product, resolve_purchase, short_id};
use crate::context::Context;
use crate::error::CliResult;

#[derive(Debug, Subcommand)]
pub enum PurchasesCmd {
    /// List purchase records, newest first
    List(PurchaseListArgs),
    /// Record a purchase (restocks the product)
    Add(PurchaseArgs),
    /// Edit a purchase; the old stock effect is reversed first
    Edit {
        /// Purchase id or unique id prefix
        purchase: String,
        #[command(flatten)]
        args: PurchaseEditArgs,
    },
    /// Delete a purchase record (stock is reduced, floored at zero)
    Delete {
        /// Purchase id or unique id prefix
        purchase: String,
    },
}

#[derive(Debug, Args)]
pub struct PurchaseListArgs {
    /// Keywords matched against product, supplier, notes, date, total
    #[arg(long, default_value = "")]
    pub search: String,
    /// Earliest date (inclusive), YYYY-MM-DD
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Latest date (inclusive), YYYY-MM-DD
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct PurchaseArgs {
    /// Product id, unique id prefix, or name
    #[arg(long)]
    pub product: String,
    /// Supplier name; empty means a general supplier
    #[arg(long, default_value = "")]
    pub supplier: String,
    #[arg(long)]
    pub quantity: i64,
    /// Cost per unit in rupees
    #[arg(long)]
    pub cost: Money,
    /// Purchase date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct PurchaseEditArgs {
    /// Move the record to a different product
    #[arg(long)]
    pub product: Option<String>,
    #[arg(long)]
    pub supplier: Option<String>,
    #[arg(long)]
    pub quantity: Option<i64>,
    #[arg(long)]
    pub cost: Option<Money>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
}

pub fn run(ctx: &Context, cmd: PurchasesCmd) -> CliResult<()> {
    match cmd {
        PurchasesCmd::List(args) => list(ctx, args),
        PurchasesCmd::Add(args) => add(ctx, args),
        PurchasesCmd::Edit { purchase, args } => edit(ctx, &purchase, args),
        PurchasesCmd::Delete { purchase } => delete(ctx, &purchase),
    }
}

// =============================================================================
// Subcommands
// =============================================================================

fn list(ctx: &Context, args: PurchaseListArgs) -> CliResult<()> {
    let data = ctx.store.load();
    let filter = PurchaseFilter {
        query: args.search,
        date_from: args.from,
        date_to: args.to,
    };
    let purchases = search::filter_purchases(&data.purchases, &filter);

    println!("{} - {}", ctx.t("purchases.title"), ctx.t("purchases.subtitle"));
    println!();
    if purchases.is_empty() {
        println!("  {}", ctx.t("purchases.noPurchases"));
        return Ok(());
    }

    println!(
        "  {:<10} {:<12} {:<24} {:<18} {:>6} {:>12} {:>12}  {}",
        "ID",
        ctx.t("purchases.thDate"),
        ctx.t("purchases.thProduct"),
        ctx.t("purchases.thSupplier"),
        ctx.t("purchases.thQty"),
        ctx.t("purchases.thCostUnit"),
        ctx.t("purchases.thTotal"),
        ctx.t("purchases.thNotes"),
    );
    for purchase in &purchases {
        let supplier = if purchase.supplier_name.is_empty() {
            "General"
        } else {
            &purchase.supplier_name
        };
        println!(
            "  {:<10} {:<12} {:<24} {:<18} {:>6} {:>12} {:>12}  {}",
            short_id(&purchase.id),
            purchase.date.to_string(),
            purchase.product_name,
            supplier,
            purchase.quantity,
            purchase.cost_per_unit.to_string(),
            purchase.total_cost.to_string(),
            notes_cell(&purchase.notes),
        );
    }

    println!();
    println!(
        "  {} {} | {}: {}",
        purchases.len(),
        ctx.t("purchases.matchesFound"),
        ctx.t("purchases.totalFiltered"),
        search::purchases_total(&purchases)
    );
    Ok(())
}

fn add(ctx: &Context, args: PurchaseArgs) -> CliResult<()> {
    let mut data = ctx.store.load();
    let product = resolve_product(&data.products, &args.product)?;
    let product_id = product.id.clone();
    let product_name = product.name.clone();

    data.apply(Command::AddPurchase(PurchaseForm {
        product_id,
        supplier_name: args.supplier,
        quantity: args.quantity,
        cost_per_unit: args.cost,
        date: args.date.unwrap_or(ctx.today),
        notes: args.notes,
    }))?;
    ctx.store.save(&data)?;

    println!(
        "Purchase recorded: {} x{} for {}",
        product_name,
        args.quantity,
        args.cost.multiply_quantity(args.quantity)
    );
    Ok(())
}

fn edit(ctx: &Context, needle: &str, args: PurchaseEditArgs) -> CliResult<()> {
    let mut data = ctx.store.load();
    let current = resolve_purchase(&data.purchases, needle)?;
    let id = current.id.clone();

    let product_id = match &args.product {
        Some(product) => resolve_product(&data.products, product)?.id.clone(),
        None => current.product_id.clone(),
    };
    let form = PurchaseForm {
        product_id,
        supplier_name: args.supplier.unwrap_or_else(|| current.supplier_name.clone()),
        quantity: args.quantity.unwrap_or(current.quantity),
        cost_per_unit: args.cost.unwrap_or(current.cost_per_unit),
        date: args.date.unwrap_or(current.date),
        notes: args.notes.or_else(|| current.notes.clone()),
    };

    data.apply(Command::EditPurchase { id, form })?;
    ctx.store.save(&data)?;

    println!("Purchase updated");
    Ok(())
}

fn delete(ctx: &Context, needle: &str) -> CliResult<()> {
    let mut data = ctx.store.load();
    let purchase = resolve_purchase(&data.purchases, needle)?;
    let id = purchase.id.clone();
    let label = format!("{} x{} ({})", purchase.product_name, purchase.quantity, purchase.date);

    if !confirm(
        "Are you sure you want to delete this purchase record? Inventory stock will be reduced.",
        ctx.assume_yes,
    )? {
        println!("Cancelled");
        return Ok(());
    }

    data.apply(Command::DeletePurchase { id })?;
    ctx.store.save(&data)?;

    println!("Purchase deleted: {}", label);
    Ok(())
}
