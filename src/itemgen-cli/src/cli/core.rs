//! Core CLI definitions

use clap::{Parser, Subcommand, ValueEnum};
use itemgen::QuoteStyle;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "itemgen")]
#[command(about = "Level-scaled item configuration generator", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Quote character for YAML strings that cannot be written plain
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuoteArg {
    Single,
    Double,
}

impl From<QuoteArg> for QuoteStyle {
    fn from(arg: QuoteArg) -> Self {
        match arg {
            QuoteArg::Single => QuoteStyle::Single,
            QuoteArg::Double => QuoteStyle::Double,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an item configuration at a level
    #[command(visible_alias = "g")]
    Generate {
        /// Records file (.json, .yml or .yaml); uses the configured default if omitted
        records: Option<PathBuf>,

        /// Item to generate (random match if omitted)
        #[arg(short, long)]
        item: Option<String>,

        /// Target level (1 = unscaled)
        #[arg(short, long, default_value_t = 1)]
        level: i64,

        /// Only pick items of this faction
        #[arg(short, long)]
        faction: Option<String>,

        /// Only pick items of this main type (e.g. Melee)
        #[arg(short = 't', long = "type")]
        item_type: Option<String>,

        /// Quote style for strings (uses the configured default if omitted)
        #[arg(short, long, value_enum)]
        quote_style: Option<QuoteArg>,

        /// Write the YAML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the random pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the in-game tooltip preview of an item
    #[command(visible_alias = "p")]
    Preview {
        /// Records file (.json, .yml or .yaml); uses the configured default if omitted
        records: Option<PathBuf>,

        /// Item to preview
        #[arg(short, long)]
        item: String,

        /// Target level (1 = unscaled)
        #[arg(short, long, default_value_t = 1)]
        level: i64,

        /// Print the styled lines as JSON
        #[arg(long)]
        json: bool,
    },

    /// List items, or the factions and types available as filters
    #[command(visible_alias = "l")]
    List {
        /// Records file (.json, .yml or .yaml); uses the configured default if omitted
        records: Option<PathBuf>,

        /// Show faction and type filter values instead of item names
        #[arg(long)]
        facets: bool,
    },

    /// Flatten a YAML item template file into records
    #[command(visible_alias = "f")]
    Flatten {
        /// Item template file
        input: PathBuf,

        /// Output file (.json, .yml or .yaml); JSON to stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default quote style
        #[arg(long, value_enum)]
        quote_style: Option<QuoteArg>,

        /// Set default records file
        #[arg(long)]
        records: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
