//! Storefront CLI - browse the catalog and drive a cart session from the terminal.
//!
//! Commands:
//! - `storefront browse` - List products with category, search and sort selections
//! - `storefront categories` - List categories with product counts
//! - `storefront product` - Show one product by id or slug
//! - `storefront cart` - Apply a sequence of cart steps and print the cart
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CartArgs, ConfigArgs, ProductArgs};
use context::Context;
use output::Output;

/// Storefront CLI - Browse the catalog and try out the cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Browse(BrowseArgs),

    /// List categories with product counts
    Categories,

    /// Show a single product
    Product(ProductArgs),

    /// Run cart steps against a fresh session
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let output = Output::new(cli.verbose, cli.json);

    if let Err(e) = run(cli, output.clone()) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: Output) -> Result<()> {
    let ctx = start(&cli, output)?;

    match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Categories => commands::browse::categories(&ctx),
        Commands::Product(args) => commands::browse::product(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    }
}

/// Read the config, start logging, then load the catalog so its load
/// events reach the subscriber.
fn start(cli: &Cli, output: Output) -> Result<Context> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = Context::resolve_config(cli.config.as_deref(), &cwd)?;
    logging::init(&config.logging, cli.verbose);
    Context::load(config, cwd, cli.catalog.as_deref(), output)
}
