//! # Customers (Udhar) View
//!
//! Customer accounts, repayments and the payment log. Deleting a
//! customer also deletes their sales records; the prompt says so.

use clap::{Args, Subcommand};

use kirana_core::ledger::{Command, CustomerForm};
use kirana_core::money::Money;

use super::{confirm, notes_cell, resolve_customer, short_id};
use crate::context::Context;
use crate::error::CliResult;

#[derive(Debug, Subcommand)]
pub enum CustomersCmd {
    /// List customers with their udhar balances
    List,
    /// Add a customer
    Add(CustomerArgs),
    /// Edit a customer; --opening-credit overwrites the credit total
    Edit {
        /// Customer id, unique id prefix, or name
        customer: String,
        #[command(flatten)]
        args: CustomerEditArgs,
    },
    /// Delete a customer AND all their sales records
    Delete {
        /// Customer id, unique id prefix, or name
        customer: String,
    },
    /// Record a repayment against a customer's balance
    Pay {
        /// Customer id, unique id prefix, or name
        customer: String,
        /// Amount in rupees
        #[arg(long)]
        amount: Money,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show one customer's account and payment history
    Show {
        /// Customer id, unique id prefix, or name
        customer: String,
    },
}

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long)]
    pub phone_alt: Option<String>,
    /// Opening udhar balance in rupees
    #[arg(long, default_value = "0")]
    pub opening_credit: Money,
}

#[derive(Debug, Args)]
pub struct CustomerEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub phone_alt: Option<String>,
    /// Overwrites the customer's total credit as entered
    #[arg(long)]
    pub opening_credit: Option<Money>,
}

pub fn run(ctx: &Context, cmd: CustomersCmd) -> CliResult<()> {
    match cmd {
        CustomersCmd::List => list(ctx),
        CustomersCmd::Add(args) => add(ctx, args),
        CustomersCmd::Edit { customer, args } => edit(ctx, &customer, args),
        CustomersCmd::Delete { customer } => delete(ctx, &customer),
        CustomersCmd::Pay {
            customer,
            amount,
            notes,
        } => pay(ctx, &customer, amount, notes),
        CustomersCmd::Show { customer } => show(ctx, &customer),
    }
}

// =============================================================================
// Subcommands
// =============================================================================

fn list(ctx: &Context) -> CliResult<()> {
    let data = ctx.store.load();

    println!("{} - {}", ctx.t("udhar.title"), ctx.t("udhar.subtitle"));
    println!();
    if data.customers.is_empty() {
        println!("  {}", ctx.t("udhar.noCustomers"));
        return Ok(());
    }

    println!(
        "  {:<10} {:<24} {:<14} {:>12} {:>12} {:>12}",
        "ID",
        "Name",
        "Phone",
        ctx.t("udhar.totalCredit"),
        ctx.t("udhar.paidAmount"),
        ctx.t("udhar.balance"),
    );
    for customer in &data.customers {
        println!(
            "  {:<10} {:<24} {:<14} {:>12} {:>12} {:>12}",
            short_id(&customer.id),
            customer.name,
            if customer.phone.is_empty() { "N/A" } else { &customer.phone },
            customer.total_credit.to_string(),
            customer.paid_amount.to_string(),
            customer.balance().to_string(),
        );
    }
    Ok(())
}

fn add(ctx: &Context, args: CustomerArgs) -> CliResult<()> {
    let mut data = ctx.store.load();
    data.apply(Command::AddCustomer(CustomerForm {
        name: args.name.clone(),
        phone: args.phone,
        phone_alt: args.phone_alt,
        opening_credit: args.opening_credit,
    }))?;
    ctx.store.save(&data)?;

    println!("Customer added: {}", args.name.trim());
    Ok(())
}

fn edit(ctx: &Context, needle: &str, args: CustomerEditArgs) -> CliResult<()> {
    let mut data = ctx.store.load();
    let current = resolve_customer(&data.customers, needle)?;

    let form = CustomerForm {
        name: args.name.unwrap_or_else(|| current.name.clone()),
        phone: args.phone.unwrap_or_else(|| current.phone.clone()),
        phone_alt: args.phone_alt.or_else(|| current.phone_alt.clone()),
        opening_credit: args.opening_credit.unwrap_or(current.total_credit),
    };
    let id = current.id.clone();

    data.apply(Command::EditCustomer { id, form })?;
    ctx.store.save(&data)?;

    println!("Customer updated");
    Ok(())
}

fn delete(ctx: &Context, needle: &str) -> CliResult<()> {
    let mut data = ctx.store.load();
    let customer = resolve_customer(&data.customers, needle)?;
    let id = customer.id.clone();
    let name = customer.name.clone();

    if !confirm(ctx.t("udhar.deleteConfirm"), ctx.assume_yes)? {
        println!("Cancelled");
        return Ok(());
    }

    data.apply(Command::DeleteCustomer { id })?;
    ctx.store.save(&data)?;

    println!("Customer deleted: {}", name);
    Ok(())
}

fn pay(ctx: &Context, needle: &str, amount: Money, notes: Option<String>) -> CliResult<()> {
    let mut data = ctx.store.load();
    let customer = resolve_customer(&data.customers, needle)?;
    let customer_id = customer.id.clone();
    let name = customer.name.clone();

    data.apply(Command::AddPayment {
        customer_id: customer_id.clone(),
        amount,
        date: ctx.today,
        notes,
    })?;
    ctx.store.save(&data)?;

    // Balance after the payment, for the receipt line
    let balance = data
        .customer(&customer_id)
        .map(|c| c.balance())
        .unwrap_or_else(Money::zero);
    println!(
        "Payment of {} recorded for {}. {}: {}",
        amount,
        name,
        ctx.t("udhar.balance"),
        balance
    );
    Ok(())
}

fn show(ctx: &Context, needle: &str) -> CliResult<()> {
    let data = ctx.store.load();
    let customer = resolve_customer(&data.customers, needle)?;

    println!("{} ({})", customer.name, short_id(&customer.id));
    println!("  Phone: {}", if customer.phone.is_empty() { "N/A" } else { &customer.phone });
    if let Some(alt) = &customer.phone_alt {
        println!("  Phone (alt): {}", alt);
    }
    println!("  {}: {}", ctx.t("udhar.totalCredit"), customer.total_credit);
    println!("  {}: {}", ctx.t("udhar.paidAmount"), customer.paid_amount);
    println!("  {}: {}", ctx.t("udhar.balance"), customer.balance());

    println!();
    println!("{}:", ctx.t("udhar.payments"));
    if customer.payments.is_empty() {
        println!("  -");
    } else {
        for payment in &customer.payments {
            println!(
                "  {}  {:>12}  {}",
                payment.date,
                payment.amount.to_string(),
                notes_cell(&payment.notes)
            );
        }
    }
    Ok(())
}
