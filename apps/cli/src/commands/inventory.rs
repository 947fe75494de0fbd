//! # Inventory View
//!
//! Product CRUD plus the per-product stock movement history.

use clap::{Args, Subcommand};

use kirana_core::ledger::{Command, ProductForm};
use kirana_core::money::Money;
use kirana_core::reports::{self, MovementKind};
use kirana_core::search;

use super::{confirm, resolve_product, short_id};
use crate::context::Context;
use crate::error::CliResult;

#[derive(Debug, Subcommand)]
pub enum InventoryCmd {
    /// List products, optionally filtered by name or category
    List {
        /// Search term matched against name and category
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Add a product
    Add(ProductArgs),
    /// Edit a product; omitted flags keep their current value
    Edit {
        /// Product id, unique id prefix, or name
        product: String,
        #[command(flatten)]
        args: ProductEditArgs,
    },
    /// Delete a product (purchase/sale history is kept)
    Delete {
        /// Product id, unique id prefix, or name
        product: String,
    },
    /// Show a product's stock movement history
    History {
        /// Product id, unique id prefix, or name
        product: String,
    },
}

#[derive(Debug, Args)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub category: String,
    /// Unit label shown next to quantities
    #[arg(long, default_value = "pcs")]
    pub unit: String,
    #[arg(long, default_value = "0")]
    pub cost_price: Money,
    #[arg(long, default_value = "0")]
    pub sell_price: Money,
    /// Opening stock count
    #[arg(long, default_value_t = 0)]
    pub stock: i64,
    /// Low-stock alert threshold
    #[arg(long, default_value_t = 5)]
    pub min_stock: i64,
}

#[derive(Debug, Args)]
pub struct ProductEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub cost_price: Option<Money>,
    #[arg(long)]
    pub sell_price: Option<Money>,
    #[arg(long)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub min_stock: Option<i64>,
}

pub fn run(ctx: &Context, cmd: InventoryCmd) -> CliResult<()> {
    match cmd {
        InventoryCmd::List { search } => list(ctx, &search),
        InventoryCmd::Add(args) => add(ctx, args),
        InventoryCmd::Edit { product, args } => edit(ctx, &product, args),
        InventoryCmd::Delete { product } => delete(ctx, &product),
        InventoryCmd::History { product } => history(ctx, &product),
    }
}

// =============================================================================
// Subcommands
// =============================================================================

fn list(ctx: &Context, search: &str) -> CliResult<()> {
    let data = ctx.store.load();
    let products = search::filter_products(&data.products, search);

    println!("{} - {}", ctx.t("inventory.title"), ctx.t("inventory.subtitle"));
    println!();
    if products.is_empty() {
        println!("  {}", ctx.t("inventory.noProducts"));
        return Ok(());
    }

    println!(
        "  {:<10} {:<24} {:<14} {:<6} {:>10} {:>10} {:>7} {:>5}",
        "ID",
        ctx.t("inventory.itemName"),
        ctx.t("inventory.category"),
        ctx.t("inventory.unit"),
        ctx.t("inventory.costPrice"),
        ctx.t("inventory.sellPrice"),
        ctx.t("inventory.stock"),
        ctx.t("inventory.minStock"),
    );
    for product in products {
        let tag = if product.is_low_stock() {
            format!("  {}", ctx.t("inventory.lowStockTag"))
        } else {
            String::new()
        };
        println!(
            "  {:<10} {:<24} {:<14} {:<6} {:>10} {:>10} {:>7} {:>5}{}",
            short_id(&product.id),
            product.name,
            product.category,
            product.unit,
            product.cost_price.to_string(),
            product.sell_price.to_string(),
            product.stock,
            product.min_stock,
            tag,
        );
    }
    Ok(())
}

fn add(ctx: &Context, args: ProductArgs) -> CliResult<()> {
    let mut data = ctx.store.load();
    data.apply(Command::AddProduct(ProductForm {
        name: args.name.clone(),
        category: args.category,
        unit: args.unit,
        cost_price: args.cost_price,
        sell_price: args.sell_price,
        stock: args.stock,
        min_stock: args.min_stock,
    }))?;
    ctx.store.save(&data)?;

    println!("Product added: {}", args.name.trim());
    Ok(())
}

fn edit(ctx: &Context, needle: &str, args: ProductEditArgs) -> CliResult<()> {
    let mut data = ctx.store.load();
    let current = resolve_product(&data.products, needle)?;

    // Omitted flags keep the stored value
    let form = ProductForm {
        name: args.name.unwrap_or_else(|| current.name.clone()),
        category: args.category.unwrap_or_else(|| current.category.clone()),
        unit: args.unit.unwrap_or_else(|| current.unit.clone()),
        cost_price: args.cost_price.unwrap_or(current.cost_price),
        sell_price: args.sell_price.unwrap_or(current.sell_price),
        stock: args.stock.unwrap_or(current.stock),
        min_stock: args.min_stock.unwrap_or(current.min_stock),
    };
    let id = current.id.clone();

    data.apply(Command::EditProduct { id, form })?;
    ctx.store.save(&data)?;

    println!("Product updated");
    Ok(())
}

fn delete(ctx: &Context, needle: &str) -> CliResult<()> {
    let mut data = ctx.store.load();
    let product = resolve_product(&data.products, needle)?;
    let id = product.id.clone();
    let name = product.name.clone();

    if !confirm(
        &format!("Are you sure you want to delete '{}'?", name),
        ctx.assume_yes,
    )? {
        println!("Cancelled");
        return Ok(());
    }

    data.apply(Command::DeleteProduct { id })?;
    ctx.store.save(&data)?;

    println!("Product deleted: {}", name);
    Ok(())
}

fn history(ctx: &Context, needle: &str) -> CliResult<()> {
    let data = ctx.store.load();
    let product = resolve_product(&data.products, needle)?;
    let movements = reports::product_movements(&data, &product.id);

    println!(
        "{}: {} ({} {})",
        ctx.t("inventory.history"),
        product.name,
        product.stock,
        product.unit
    );
    println!();
    for movement in movements {
        let (sign, label) = match movement.kind {
            MovementKind::Purchase => ("+", "IN "),
            MovementKind::Sale => ("-", "OUT"),
        };
        println!(
            "  {}  {} {}{:<5} {:<28} @ {}",
            movement.date, label, sign, movement.quantity, movement.entity, movement.price
        );
    }
    Ok(())
}
