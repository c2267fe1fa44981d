//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::search::{SearchForm, PROPERTY_KINDS};

/// staymate - browse property listings from a static dataset
#[derive(Parser, Debug)]
#[command(name = "staymate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dataset JSON document (default: bundled sample listings)
    #[arg(long, global = true, env = "STAYMATE_DATASET")]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List properties matching the given filters
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the full detail of one property
    Show {
        /// Property id
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read session actions from stdin, one per line
    Session,
}

/// Search filters. Numeric values are taken as typed: text that does not
/// start with a number leaves that bound open.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Property type (House, Flat, Any)
    #[arg(short = 't', long = "type", value_parser = PROPERTY_KINDS)]
    pub kind: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    #[arg(long)]
    pub min_bedrooms: Option<String>,

    #[arg(long)]
    pub max_bedrooms: Option<String>,

    /// Postal code area, matched as a case-insensitive substring
    #[arg(short, long)]
    pub postcode: Option<String>,

    /// Added on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub added_after: Option<String>,
}

impl From<FilterArgs> for SearchForm {
    fn from(args: FilterArgs) -> Self {
        SearchForm {
            kind: args.kind,
            min_price: args.min_price.unwrap_or_default(),
            max_price: args.max_price.unwrap_or_default(),
            min_bedrooms: args.min_bedrooms.unwrap_or_default(),
            max_bedrooms: args.max_bedrooms.unwrap_or_default(),
            postal_code_area: args.postcode.unwrap_or_default(),
            added_after: args.added_after,
        }
    }
}
