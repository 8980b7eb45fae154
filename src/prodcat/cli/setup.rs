use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prodcat", bin_name = "prodcat", version)]
#[command(about = "Manage a product catalog stored in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog directory (default: $PRODCAT_HOME, or ./.prodcat)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Use the catalog in the user data directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Backing JSON file, overriding the configured file name
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Product fields given on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct ProductFields {
    /// Product title
    #[arg(long)]
    pub title: Option<String>,

    /// Product description
    #[arg(long)]
    pub description: Option<String>,

    /// Unit price
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Image path or URL
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Unique product code
    #[arg(long)]
    pub code: Option<String>,

    /// Units in stock
    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<i64>,

    /// Fields as a JSON object; flags take precedence over it
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a")]
    Add(ProductFields),

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show the product with the given id
    Get { id: u64 },

    /// Show the product with the given code
    Find { code: String },

    /// Change fields of a product
    #[command(alias = "up")]
    Update {
        id: u64,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Remove { id: u64 },

    /// Add the sample products
    Seed,

    /// Seed the catalog, then walk through find, update and remove
    Demo,

    /// Get or set configuration
    Config {
        /// Configuration key (file-name, strict-load, resume-ids)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the catalog directory, config and an empty catalog file
    Init,
}
