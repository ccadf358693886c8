use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// catering: aggregate and cost catering orders from dish selections.
#[derive(Parser, Debug)]
#[command(name = "catering")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the master catalog JSON file.
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Path to the customer records JSON file.
    #[arg(long, default_value = "customers.json")]
    pub customers: PathBuf,

    /// Optional JSON file with extra unit conversions.
    #[arg(long)]
    pub units: Option<PathBuf>,

    /// Language for line names.
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Save without asking for confirmation.
    #[arg(short, long)]
    pub yes: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Env filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate (or reprice) a customer's order and save it.
    Generate {
        #[arg(long)]
        customer: String,

        /// Keep existing lines and only refresh prices.
        #[arg(long)]
        reprice: bool,
    },

    /// Show a customer's saved order.
    Show {
        #[arg(long)]
        customer: String,
    },

    /// Add an ingredient quantity, merging into an existing line.
    AddIngredient {
        #[arg(long)]
        customer: String,

        /// Ingredient id or name.
        #[arg(long)]
        ingredient: String,

        #[arg(long)]
        quantity: f64,

        #[arg(long)]
        unit: String,
    },

    /// Replace the quantity of an ingredient line.
    EditIngredient {
        #[arg(long)]
        customer: String,

        #[arg(long)]
        line: String,

        #[arg(long)]
        quantity: f64,

        #[arg(long)]
        unit: String,
    },

    /// Remove an ingredient line.
    RemoveIngredient {
        #[arg(long)]
        customer: String,

        #[arg(long)]
        line: String,
    },

    /// Add a cooking item quantity, adding to an existing line.
    AddCookingItem {
        #[arg(long)]
        customer: String,

        /// Cooking item id or name.
        #[arg(long)]
        item: String,

        #[arg(long)]
        quantity: f64,
    },

    /// Replace the quantity of a cooking item line.
    EditCookingItem {
        #[arg(long)]
        customer: String,

        #[arg(long)]
        line: String,

        #[arg(long)]
        quantity: f64,
    },

    /// Remove a cooking item line.
    RemoveCookingItem {
        #[arg(long)]
        customer: String,

        #[arg(long)]
        line: String,
    },

    /// Print the unit conversion table.
    Units,
}
