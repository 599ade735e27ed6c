//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;

use std::fmt;
use std::str::FromStr;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category id, or `all`.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Case-insensitive search over names and descriptions.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: name, price-low, price-high, featured.
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id or slug.
    pub product: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Steps applied in order: `add:ID`, `remove:ID`, `set:ID=QTY`, `clear`.
    /// IDs may also be product slugs.
    #[arg(required = true)]
    pub steps: Vec<CartStep>,
}

/// One cart step from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartStep {
    Add(String),
    Remove(String),
    Set(String, i64),
    Clear,
}

impl FromStr for CartStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "clear" {
            return Ok(CartStep::Clear);
        }

        let (op, arg) = s
            .split_once(':')
            .ok_or_else(|| format!("expected OP:ARG or `clear`, got `{}`", s))?;
        if arg.is_empty() {
            return Err(format!("missing product in `{}`", s));
        }

        match op {
            "add" => Ok(CartStep::Add(arg.to_string())),
            "remove" => Ok(CartStep::Remove(arg.to_string())),
            "set" => {
                let (product, qty) = arg
                    .split_once('=')
                    .ok_or_else(|| format!("expected set:ID=QTY, got `{}`", s))?;
                let qty = qty
                    .parse::<i64>()
                    .map_err(|e| format!("invalid quantity in `{}`: {}", s, e))?;
                Ok(CartStep::Set(product.to_string(), qty))
            }
            other => Err(format!("unknown cart step `{}`", other)),
        }
    }
}

impl fmt::Display for CartStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartStep::Add(p) => write!(f, "add:{}", p),
            CartStep::Remove(p) => write!(f, "remove:{}", p),
            CartStep::Set(p, q) => write!(f, "set:{}={}", p, q),
            CartStep::Clear => f.write_str("clear"),
        }
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
