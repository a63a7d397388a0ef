//! Command-line parsing for the star data tools.
//!
//! Every option defaults to the value the original one-off scripts had
//! hard-coded, so running a subcommand bare reproduces that behavior.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{
    DEFAULT_CATALOG_PATH, DEFAULT_CSV_PATH, DEFAULT_STAR_COUNT, DEFAULT_STATS_COLUMN,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "stars",
    version,
    about = "Star catalog CSV checks and synthetic catalog generation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every data row's first column is an integer.
    Validate(ValidateArgs),
    /// Print min/max/average of a numeric column.
    Stats(StatsArgs),
    /// Generate a synthetic star-system catalog JSON.
    Generate(GenerateArgs),
    /// Summarize a catalog JSON by stellar class.
    Summary(SummaryArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct ValidateArgs {
    /// CSV file to check (first row is treated as a header).
    #[arg(long, value_name = "CSV", default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Reject negative integers.
    #[arg(long)]
    pub unsigned: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct StatsArgs {
    /// CSV file with a header row.
    #[arg(long, value_name = "CSV", default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Column to summarize.
    #[arg(long, default_value = DEFAULT_STATS_COLUMN)]
    pub column: String,
}

#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// Output JSON path (overwritten).
    #[arg(short, long, value_name = "JSON", default_value = DEFAULT_CATALOG_PATH)]
    pub output: PathBuf,

    /// Number of star systems to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_STAR_COUNT)]
    pub count: usize,

    /// Random seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// Catalog JSON produced by `stars generate`.
    #[arg(short, long, value_name = "JSON", default_value = DEFAULT_CATALOG_PATH)]
    pub input: PathBuf,
}
