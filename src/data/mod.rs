//! Synthetic data sources.

pub mod generate;

pub use generate::{generate_catalog, generate_star_system};
