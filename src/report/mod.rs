//! Reporting utilities: catalog summaries and formatted terminal output.

use crate::domain::{ColumnStats, StarCatalog, StellarType};

pub mod format;

pub use format::*;

/// Per-class counts and distance statistics for a catalog.
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    pub total: usize,
    /// In `StellarType::ALL` order; classes with no stars are kept with 0.
    pub by_class: Vec<(StellarType, usize)>,
    pub distance: ColumnStats,
}

pub fn summarize_catalog(catalog: &StarCatalog) -> CatalogSummary {
    let mut by_class: Vec<(StellarType, usize)> =
        StellarType::ALL.iter().map(|&t| (t, 0)).collect();
    let mut distance = ColumnStats::default();

    for star in &catalog.star_systems {
        if let Some(entry) = by_class.iter_mut().find(|(t, _)| *t == star.stellartype) {
            entry.1 += 1;
        }
        distance.push(star.distance);
    }

    CatalogSummary {
        total: catalog.star_systems.len(),
        by_class,
        distance,
    }
}
