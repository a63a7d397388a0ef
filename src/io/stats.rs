//! Min/max/average over one named numeric column.
//!
//! Unlike the validator, nothing here is forgiving: a missing file, a
//! missing column or a single unparseable value aborts the scan.

use std::fs::File;

use tracing::debug;

use crate::domain::{ColumnStats, StatsConfig};
use crate::error::{AppError, ErrorKind};

pub fn column_stats(config: &StatsConfig) -> Result<ColumnStats, AppError> {
    let path = &config.csv_path;
    let file = File::open(path).map_err(|e| AppError::open(path, "open CSV", e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| {
        AppError::new(ErrorKind::Parse, format!("Failed to read CSV headers: {e}"))
    })?;
    let column = config.column.as_str();
    // Resolved lazily: a file with no data rows never needs the column.
    let column_idx = headers.iter().position(|h| normalize_header_name(h) == column);
    debug!(path = %path.display(), column, ?column_idx, "scanning column");

    let mut stats = ColumnStats::default();
    for (i, result) in reader.records().enumerate() {
        let fallback_line = i as u64 + 2;
        let record = result
            .map_err(|e| AppError::new(ErrorKind::Parse, format!("CSV parse error: {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);

        let idx = column_idx.ok_or_else(|| {
            AppError::new(
                ErrorKind::MissingColumn,
                format!("Missing required column: `{column}`"),
            )
        })?;
        let raw = record.get(idx).ok_or_else(|| {
            AppError::new(
                ErrorKind::Parse,
                format!("Line {line}: missing `{column}` value"),
            )
        })?;
        let value = raw.trim().parse::<f64>().map_err(|_| {
            AppError::new(
                ErrorKind::Parse,
                format!("Line {line}: could not parse `{column}` value '{raw}' as a number"),
            )
        })?;
        stats.push(value);
    }

    debug!(count = stats.count, "column scan complete");
    Ok(stats)
}

fn normalize_header_name(name: &str) -> &str {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}')
}
