//! Command line of the `fairway` binary.

use clap::{Parser, Subcommand};

use fairway_core::DomainError;
use fairway_products::GloveSize;

/// Terminal front end for the golf storefront catalog.
#[derive(Parser, Debug)]
#[command(name = "fairway", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// The requested command; listing the catalog when none is given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the catalog, optionally filtered.
    Catalog {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        brand: Option<String>,
    },
    /// Show one product and optionally add it to the cart.
    Detail {
        /// Product reference, e.g. AFG-P001.
        reference: String,
        /// Glove size to select (S, M, L, XL, XXL).
        #[arg(long, value_parser = parse_size)]
        size: Option<GloveSize>,
        #[arg(long)]
        add: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Catalog {
            category: None,
            brand: None,
        }
    }
}

fn parse_size(raw: &str) -> Result<GloveSize, DomainError> {
    raw.parse()
}
