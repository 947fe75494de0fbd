//! # Sales View
//!
//! Sale recording and the filtered history. Sales deliberately have
//! no edit or delete subcommand; the asymmetry with purchases keeps
//! stock and udhar history from being rewritten after the fact.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use kirana_core::ledger::{Command, SaleForm};
use kirana_core::search::{self, SaleFilter};
use kirana_core::types::PaymentType;

use super::{notes_cell, resolve_customer, resolve_product};
use crate::context::Context;
use crate::error::CliResult;

#[derive(Debug, Subcommand)]
pub enum SalesCmd {
    /// List sales, newest first
    List(SaleListArgs),
    /// Record a sale (reduces stock; credit raises the customer's udhar)
    Add(SaleArgs),
}

#[derive(Debug, Args)]
pub struct SaleListArgs {
    /// Keywords matched against product, customer, notes, date, total
    #[arg(long, default_value = "")]
    pub search: String,
    /// Only cash or only credit sales
    #[arg(long)]
    pub payment: Option<PaymentType>,
    /// Only sales to this customer (id, unique id prefix, or name)
    #[arg(long)]
    pub customer: Option<String>,
    /// Earliest date (inclusive), YYYY-MM-DD
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Latest date (inclusive), YYYY-MM-DD
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct SaleArgs {
    /// Product id, unique id prefix, or name
    #[arg(long)]
    pub product: String,
    /// Customer (required for credit sales)
    #[arg(long)]
    pub customer: Option<String>,
    #[arg(long)]
    pub quantity: i64,
    /// cash or credit
    #[arg(long, default_value = "cash")]
    pub payment: PaymentType,
    /// Sale date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
}

pub fn run(ctx: &Context, cmd: SalesCmd) -> CliResult<()> {
    match cmd {
        SalesCmd::List(args) => list(ctx, args),
        SalesCmd::Add(args) => add(ctx, args),
    }
}

// =============================================================================
// Subcommands
// =============================================================================

fn list(ctx: &Context, args: SaleListArgs) -> CliResult<()> {
    let data = ctx.store.load();

    let customer_id = match &args.customer {
        Some(needle) => Some(resolve_customer(&data.customers, needle)?.id.clone()),
        None => None,
    };
    let filter = SaleFilter {
        query: args.search,
        payment_type: args.payment,
        customer_id,
        date_from: args.from,
        date_to: args.to,
    };
    let sales = search::filter_sales(&data.sales, &filter);

    println!("{} - {}", ctx.t("sales.title"), ctx.t("sales.subtitle"));
    println!();
    if sales.is_empty() {
        println!("  {}", ctx.t("sales.noSales"));
        return Ok(());
    }

    println!(
        "  {:<12} {:<24} {:<18} {:>6} {:>10} {:>12} {:<8}  {}",
        ctx.t("sales.thDate"),
        ctx.t("sales.thProduct"),
        ctx.t("sales.thCustomer"),
        ctx.t("sales.thQty"),
        ctx.t("sales.thPrice"),
        ctx.t("sales.thTotal"),
        ctx.t("sales.thPayment"),
        ctx.t("sales.thNotes"),
    );
    for sale in &sales {
        println!(
            "  {:<12} {:<24} {:<18} {:>6} {:>10} {:>12} {:<8}  {}",
            sale.date.to_string(),
            sale.product_name,
            sale.customer_name.as_deref().unwrap_or("Walk-in"),
            sale.quantity,
            sale.sell_price.to_string(),
            sale.total_amount.to_string(),
            sale.payment_type.to_string(),
            notes_cell(&sale.notes),
        );
    }

    println!();
    println!(
        "  {} {} | {}: {}",
        sales.len(),
        ctx.t("sales.matchesFound"),
        ctx.t("sales.totalFiltered"),
        search::sales_total(&sales)
    );
    Ok(())
}

fn add(ctx: &Context, args: SaleArgs) -> CliResult<()> {
    let mut data = ctx.store.load();
    let product_id = resolve_product(&data.products, &args.product)?.id.clone();
    let customer_id = match &args.customer {
        Some(needle) => Some(resolve_customer(&data.customers, needle)?.id.clone()),
        None => None,
    };

    data.apply(Command::AddSale(SaleForm {
        product_id,
        customer_id,
        quantity: args.quantity,
        payment_type: args.payment,
        date: args.date.unwrap_or(ctx.today),
        notes: args.notes,
    }))?;
    ctx.store.save(&data)?;

    // The reducer appended the new sale last
    if let Some(sale) = data.sales.last() {
        println!(
            "Sale recorded: {} x{} = {} ({})",
            sale.product_name, sale.quantity, sale.total_amount, sale.payment_type
        );
    }
    Ok(())
}
