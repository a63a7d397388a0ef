//! Synthetic star-system catalog generation.
//!
//! Every record is an independent draw: a pronounceable name built from
//! two or three syllables, a distance, and a spectral class. Names are not
//! deduplicated.

use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

use crate::domain::{GenerateConfig, StarCatalog, StarSystem, StellarType};

/// Lowercase two-letter building blocks for names.
pub const SYLLABLES: [&str; 24] = [
    "al", "ar", "ba", "ce", "da", "el", "fa", "ga", "jo", "ki", "lo", "ma",
    "ne", "or", "pa", "qu", "ri", "sa", "te", "vi", "wa", "xo", "yi", "zo",
];

pub const MIN_SYLLABLES: usize = 2;
pub const MAX_SYLLABLES: usize = 3;

pub const MIN_DISTANCE: f64 = 5.0;
pub const MAX_DISTANCE: f64 = 2000.0;
const DISTANCE_DECIMALS: i32 = 4;

pub fn generate_catalog(config: &GenerateConfig) -> StarCatalog {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(count = config.count, seed = ?config.seed, "generating catalog");

    let star_systems = (0..config.count)
        .map(|_| generate_star_system(&mut rng))
        .collect();
    StarCatalog { star_systems }
}

pub fn generate_star_system<R: Rng>(rng: &mut R) -> StarSystem {
    StarSystem {
        name: generate_name(rng),
        distance: generate_distance(rng),
        stellartype: generate_stellar_type(rng),
    }
}

/// Title-cased pseudoword of 2 or 3 syllables, e.g. `Kilori`.
pub fn generate_name<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(MIN_SYLLABLES..=MAX_SYLLABLES);
    let word: String = (0..len)
        .map(|_| SYLLABLES[rng.gen_range(0..SYLLABLES.len())])
        .collect();

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => word,
    }
}

/// Uniform in `[MIN_DISTANCE, MAX_DISTANCE]`, rounded to 4 decimals.
pub fn generate_distance<R: Rng>(rng: &mut R) -> f64 {
    let raw = rng.gen_range(MIN_DISTANCE..=MAX_DISTANCE);
    round_to(raw, DISTANCE_DECIMALS)
}

pub fn generate_stellar_type<R: Rng>(rng: &mut R) -> StellarType {
    StellarType::ALL[rng.gen_range(0..StellarType::ALL.len())]
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
