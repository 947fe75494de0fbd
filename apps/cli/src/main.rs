//! # Kirana Khata CLI Entry Point
//!
//! The `kirana` binary: a single-shop retail ledger on the terminal.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          kirana (CLI)                               │
//! │                                                                     │
//! │  main.rs ────► logging, config, store handle, dispatch              │
//! │                                                                     │
//! │  commands/ ──► dashboard, inventory, purchases, sales,              │
//! │                customers (udhar), reports, reset                    │
//! │                                                                     │
//! │  context.rs ─► Store + language + today, passed to every view       │
//! │                                                                     │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  kirana-core (Command reducer)  +  kirana-store (JSON document)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (RUST_LOG, default warn, to stderr)
//! 2. Parse arguments
//! 3. Load app.toml (language; --lang overrides)
//! 4. Open the store document (--data-file overrides the data dir)
//! 5. Dispatch to the requested view

mod commands;
mod context;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kirana_core::i18n::Language;
use kirana_store::{AppConfig, Store};

use commands::customers::CustomersCmd;
use commands::inventory::InventoryCmd;
use commands::purchases::PurchasesCmd;
use commands::reports::ReportsArgs;
use commands::sales::SalesCmd;
use context::Context;
use error::CliResult;

// =============================================================================
// Argument Surface
// =============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "kirana",
    version,
    about = "Kirana Khata - products, purchases, sales and udhar for a single shop"
)]
struct Cli {
    /// Path of the store document (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// UI language: en or ne (overrides app.toml and KIRANA_LANG)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Today's shop overview
    Dashboard,
    /// Products and stock levels
    #[command(subcommand)]
    Inventory(InventoryCmd),
    /// Purchase records
    #[command(subcommand)]
    Purchases(PurchasesCmd),
    /// Sales records
    #[command(subcommand)]
    Sales(SalesCmd),
    /// Customer udhar accounts
    #[command(subcommand)]
    Customers(CustomersCmd),
    /// Time-framed totals and CSV export
    Reports(ReportsArgs),
    /// Show or switch the saved UI language
    Lang {
        /// New language (en or ne); omit to show the current one
        language: Option<Language>,
    },
    /// Permanently delete all shop data
    Reset,
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load_or_default(None);
    let store = match cli.data_file {
        Some(path) => Store::at(path),
        None => Store::open_default()?,
    };

    let ctx = Context {
        store,
        lang: cli.lang.unwrap_or(config.language),
        assume_yes: cli.yes,
        today: Local::now().date_naive(),
    };

    match cli.command {
        Commands::Dashboard => commands::dashboard::run(&ctx),
        Commands::Inventory(cmd) => commands::inventory::run(&ctx, cmd),
        Commands::Purchases(cmd) => commands::purchases::run(&ctx, cmd),
        Commands::Sales(cmd) => commands::sales::run(&ctx, cmd),
        Commands::Customers(cmd) => commands::customers::run(&ctx, cmd),
        Commands::Reports(args) => commands::reports::run(&ctx, args),
        Commands::Lang { language } => switch_language(config, language),
        Commands::Reset => reset(&ctx),
    }
}

/// Shows or persists the UI language (the persisted language lives in
/// app.toml, outside the shop document).
fn switch_language(mut config: AppConfig, language: Option<Language>) -> CliResult<()> {
    match language {
        Some(language) => {
            config.language = language;
            config.save(None)?;
            println!("Language set to {}", language);
        }
        None => println!("{}", config.language),
    }
    Ok(())
}

/// The "clear all data" action: delete the document after an explicit
/// confirmation. There is no undo.
fn reset(ctx: &Context) -> CliResult<()> {
    if !commands::confirm(
        "This will permanently delete ALL shop data. Continue?",
        ctx.assume_yes,
    )? {
        println!("Cancelled");
        return Ok(());
    }

    ctx.store.reset()?;
    println!("All data cleared");
    Ok(())
}
