//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - produced by the generator and written as a catalog document
//! - reloaded later for summaries
//! - built from CLI arguments as per-operation configs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default CSV input for the validator and the statistics scan.
pub const DEFAULT_CSV_PATH: &str = "hygdata_v40.csv";
/// Default catalog document written by `generate` and read by `summary`.
pub const DEFAULT_CATALOG_PATH: &str = "star_data.json";
/// Column summarized by `stats` unless overridden.
pub const DEFAULT_STATS_COLUMN: &str = "ra";
/// Number of records produced by `generate` unless overridden.
pub const DEFAULT_STAR_COUNT: usize = 15_000;

/// Spectral class label attached to a generated star system.
///
/// Used as flavor data only; serializes as its single letter (`"G"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StellarType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl StellarType {
    /// Hottest to coolest.
    pub const ALL: [StellarType; 7] = [
        StellarType::O,
        StellarType::B,
        StellarType::A,
        StellarType::F,
        StellarType::G,
        StellarType::K,
        StellarType::M,
    ];

    pub fn letter(self) -> char {
        match self {
            StellarType::O => 'O',
            StellarType::B => 'B',
            StellarType::A => 'A',
            StellarType::F => 'F',
            StellarType::G => 'G',
            StellarType::K => 'K',
            StellarType::M => 'M',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.letter() == c)
    }
}

impl fmt::Display for StellarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for StellarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_letter(c).ok_or_else(|| format!("Unknown stellar type '{s}'"))
            }
            _ => Err(format!("Unknown stellar type '{s}'")),
        }
    }
}

/// One generated pseudo star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub name: String,
    pub distance: f64,
    pub stellartype: StellarType,
}

/// The catalog document: a single `star_systems` key holding all records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StarCatalog {
    pub star_systems: Vec<StarSystem>,
}

/// Running min/max/sum/count over a numeric column.
///
/// Owned by a single scan; `average()` is 0 for an empty dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: usize,
}

impl Default for ColumnStats {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl ColumnStats {
    pub fn push(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.sum += value;
        self.count += 1;
    }

    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }
}

/// Why a row was rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The row had no fields at all (a blank line).
    MalformedRow,
    /// The first field is not an integer token.
    NotAnInteger,
}

/// The first row the validator rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRow {
    /// 1-based line number in the input file.
    pub line: u64,
    /// Row content exactly as written in the file, without its line terminator.
    pub row: String,
    pub reason: InvalidReason,
}

/// Outcome of a first-column validation scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid { rows: usize },
    Invalid(InvalidRow),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }
}

/// Configuration for the first-column validator.
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub csv_path: PathBuf,
    /// Accept a leading `-` on integer tokens.
    ///
    /// `true` keeps the historical behavior: the check was meant to be
    /// "unsigned" but the parse it relied on accepted negatives.
    pub allow_negative: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            allow_negative: true,
        }
    }
}

/// Configuration for the column statistics scan.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub csv_path: PathBuf,
    pub column: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            column: DEFAULT_STATS_COLUMN.to_string(),
        }
    }
}

/// Configuration for synthetic catalog generation.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub output_path: PathBuf,
    pub count: usize,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            count: DEFAULT_STAR_COUNT,
            seed: None,
        }
    }
}

/// Configuration for summarizing an existing catalog.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub catalog_path: PathBuf,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}
