//! Duka CLI - Browse the catalog and build a cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! duka-cli catalog
//!
//! # List one category
//! duka-cli catalog --category Kitchenware
//!
//! # List the categories
//! duka-cli categories
//!
//! # Add products 1 and 3 to a cart and print the checkout summary
//! duka-cli checkout 1 3
//!
//! # Use a catalog file instead of the built-in products
//! duka-cli --catalog products.json catalog
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print catalog cards
//! - `categories` - Print distinct categories
//! - `checkout` - View and add products, then print the checkout section

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use duka_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "duka-cli")]
#[command(author, version, about = "Duka shop from the terminal")]
struct Cli {
    /// JSON catalog file (defaults to the built-in catalog)
    #[arg(long, global = true, env = "CATALOG_PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print catalog cards
    Catalog {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Print the distinct product categories
    Categories,
    /// Add products to a cart and print the checkout summary
    Checkout {
        /// Product IDs, in the order they are added
        #[arg(required = true)]
        ids: Vec<ProductId>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    let output = match cli.command {
        Commands::Catalog { category } => commands::catalog::cards(catalog, category.as_deref()),
        Commands::Categories => commands::catalog::categories(&catalog),
        Commands::Checkout { ids } => commands::checkout::run(catalog, &ids)?,
    };

    commands::print(&output);
    Ok(())
}
