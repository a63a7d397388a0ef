//! Domain types used throughout the tools.
//!
//! This module defines:
//!
//! - per-operation configs (`ValidateConfig`, `StatsConfig`, `GenerateConfig`, `SummaryConfig`)
//! - scan results (`Validation`, `ColumnStats`)
//! - catalog records (`StarSystem`, `StellarType`, `StarCatalog`)
//! - display colours for stellar classes (`color`)

pub mod color;
pub mod types;

pub use color::*;
pub use types::*;
