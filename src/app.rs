//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - parses CLI arguments into per-operation configs
//! - runs the requested operation
//! - prints the report
//!
//! The operations themselves all return `Result`. How an error is surfaced
//! differs per command and is decided here:
//! - `validate` reports a missing file or a bad row on stdout and exits 1
//! - `stats`, `generate` and `summary` propagate every error (stderr, exit 2/4)

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, GenerateArgs, StatsArgs, SummaryArgs, ValidateArgs};
use crate::domain::{GenerateConfig, StatsConfig, SummaryConfig, ValidateConfig, Validation};
use crate::error::{AppError, ErrorKind};

/// Exit code for a completed validation that found a bad row.
const VALIDATION_FAILED_EXIT: u8 = 1;

/// Entry point for the `stars` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Validate(args) => handle_validate(&validate_config_from_args(&args)),
        Command::Stats(args) => handle_stats(&stats_config_from_args(&args)),
        Command::Generate(args) => handle_generate(&generate_config_from_args(&args)),
        Command::Summary(args) => handle_summary(&summary_config_from_args(&args)),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_validate(config: &ValidateConfig) -> Result<(), AppError> {
    let validation = match crate::io::validate_first_column(config) {
        Ok(v) => v,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("{}", crate::report::format_missing_input(&config.csv_path));
            return Err(validation_failed(config));
        }
        Err(e) => return Err(e),
    };

    println!("{}", crate::report::format_validation(&validation));
    match validation {
        Validation::Valid { rows } => {
            debug!(rows, "validation passed");
            Ok(())
        }
        Validation::Invalid(_) => Err(validation_failed(config)),
    }
}

fn validation_failed(config: &ValidateConfig) -> AppError {
    AppError::with_exit_code(
        ErrorKind::Parse,
        VALIDATION_FAILED_EXIT,
        format!("Validation failed for '{}'", config.csv_path.display()),
    )
}

fn handle_stats(config: &StatsConfig) -> Result<(), AppError> {
    let stats = crate::io::column_stats(config)?;
    println!("{}", crate::report::format_column_stats(&config.column, &stats));
    Ok(())
}

fn handle_generate(config: &GenerateConfig) -> Result<(), AppError> {
    let catalog = crate::data::generate_catalog(config);
    crate::io::write_catalog(&config.output_path, &catalog)?;
    println!(
        "{}",
        crate::report::format_generated(catalog.star_systems.len(), &config.output_path)
    );
    Ok(())
}

fn handle_summary(config: &SummaryConfig) -> Result<(), AppError> {
    let catalog = crate::io::read_catalog(&config.catalog_path)?;
    let summary = crate::report::summarize_catalog(&catalog);
    println!("{}", crate::report::format_catalog_summary(&summary));
    Ok(())
}

pub fn validate_config_from_args(args: &ValidateArgs) -> ValidateConfig {
    ValidateConfig {
        csv_path: args.csv.clone(),
        allow_negative: !args.unsigned,
    }
}

pub fn stats_config_from_args(args: &StatsArgs) -> StatsConfig {
    StatsConfig {
        csv_path: args.csv.clone(),
        column: args.column.clone(),
    }
}

pub fn generate_config_from_args(args: &GenerateArgs) -> GenerateConfig {
    GenerateConfig {
        output_path: args.output.clone(),
        count: args.count,
        seed: args.seed,
    }
}

pub fn summary_config_from_args(args: &SummaryArgs) -> SummaryConfig {
    SummaryConfig {
        catalog_path: args.input.clone(),
    }
}
