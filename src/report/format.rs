//! Terminal output for each command.
//!
//! We keep formatting code in one place so output changes are localized and
//! the scan/generation code never prints.

use std::path::Path;

use crate::domain::{ColumnStats, InvalidReason, Validation};
use crate::report::CatalogSummary;

const ALL_VALID: &str = "All IDs in column 0 are valid.";
const SOME_INVALID: &str = "Some IDs in column 0 are invalid.";

/// Validation outcome: an optional diagnostic line followed by the verdict.
pub fn format_validation(validation: &Validation) -> String {
    match validation {
        Validation::Valid { .. } => ALL_VALID.to_string(),
        Validation::Invalid(bad) => {
            let what = match bad.reason {
                InvalidReason::MalformedRow => "No fields found in row",
                InvalidReason::NotAnInteger => "Invalid ID value in row",
            };
            format!("{what} (line {}): {}\n{SOME_INVALID}", bad.line, bad.row)
        }
    }
}

/// The validator's report for a missing input file.
pub fn format_missing_input(path: &Path) -> String {
    format!("Error: CSV file not found: {}\n{SOME_INVALID}", path.display())
}

/// `Minimum RA value: -5.0` etc.
///
/// An empty scan prints the untouched infinities and a plain `0` average.
pub fn format_column_stats(column: &str, stats: &ColumnStats) -> String {
    let label = column.to_uppercase();
    let average = if stats.count > 0 {
        format_float(stats.average())
    } else {
        "0".to_string()
    };
    format!(
        "Minimum {label} value: {}\nMaximum {label} value: {}\nAverage {label} value: {average}",
        format_float(stats.min),
        format_float(stats.max),
    )
}

pub fn format_generated(count: usize, path: &Path) -> String {
    format!("Generated {count} star systems saved to '{}'.", path.display())
}

pub fn format_catalog_summary(summary: &CatalogSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Star systems: {}\n", summary.total));
    for (class, count) in &summary.by_class {
        out.push_str(&format!("  {class}  {count:>7}  {}\n", class.color().hex()));
    }
    out.push_str(&format!(
        "Distance: min={:.4} max={:.4} avg={:.4}",
        summary.distance.min,
        summary.distance.max,
        summary.distance.average()
    ));
    out
}

/// Shortest round-trip float text that always reads as a float.
///
/// Integral values keep a `.0` (`20.0`), very large or very small magnitudes
/// switch to exponent form (`1e+16`, `1.5e-05`), and non-finite values print
/// as `inf`, `-inf` and `nan`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        let text = if v > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        // `{:e}` gives e.g. "1.5e-5"; pad the exponent to two digits with a sign.
        let text = format!("{v:e}");
        let Some((mantissa, exp)) = text.split_once('e') else {
            return text;
        };
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(d) => ('-', d),
            None => ('+', exp),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }

    let text = v.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
