//! Essence Luxe CLI - Catalog queries without running the server.
//!
//! # Usage
//!
//! ```bash
//! # Products in a category, cheapest first
//! el-cli products --category Floral --sort-by price --order asc
//!
//! # A single product
//! el-cli product 3
//!
//! # Category choices
//! el-cli categories
//!
//! # Check a catalog file before deploying it
//! el-cli validate ./catalog.json
//! ```
//!
//! Every command reads the embedded seed catalog unless `--catalog` (or
//! `STOREFRONT_CATALOG_PATH`) names a file. Results are printed as JSON.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use essence_luxe_core::{ProductFilters, SortKey, SortOrder};

mod commands;

#[derive(Parser)]
#[command(name = "el-cli")]
#[command(author, version, about = "Essence Luxe CLI tools")]
struct Cli {
    /// Catalog JSON file (defaults to the embedded seed)
    #[arg(long, global = true, env = "STOREFRONT_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching filters
    Products {
        /// Category name ("All" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Inclusive minimum base price
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Inclusive maximum base price
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Sort key (price, name, date)
        #[arg(long)]
        sort_by: Option<SortKey>,

        /// Sort order (asc, desc)
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Search text over name and descriptions
        #[arg(short, long)]
        q: Option<String>,
    },
    /// Show a single product
    Product {
        /// Product ID
        id: String,
    },
    /// List category choices
    Categories,
    /// Validate a catalog file
    Validate {
        /// Path to the catalog JSON file
        path: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = cli.catalog.as_deref();
    let output = match cli.command {
        Commands::Products {
            category,
            min_price,
            max_price,
            sort_by,
            order,
            q,
        } => {
            let filters = ProductFilters {
                q,
                category,
                min_price,
                max_price,
                sort_by,
                order,
            };
            serde_json::to_value(commands::catalog::products(catalog, &filters)?)?
        }
        Commands::Product { id } => serde_json::to_value(commands::catalog::product(catalog, &id)?)?,
        Commands::Categories => serde_json::to_value(commands::catalog::categories(catalog)?)?,
        Commands::Validate { path } => serde_json::to_value(commands::catalog::validate(&path)?)?,
    };

    print_json(&output)
}

#[allow(clippy::print_stdout)]
fn print_json(value: &serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
