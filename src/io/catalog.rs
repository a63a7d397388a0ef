//! Read/write star catalog JSON files.
//!
//! A catalog is a single object with one key:
//! `{ "star_systems": [ { "name", "distance", "stellartype" }, ... ] }`.
//! Writing always truncates whatever was at the path before.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::domain::StarCatalog;
use crate::error::{AppError, ErrorKind};

/// Write a catalog as pretty-printed (2-space indented) JSON.
pub fn write_catalog(path: &Path, catalog: &StarCatalog) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::open(path, "create catalog JSON", e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, catalog).map_err(|e| {
        AppError::new(ErrorKind::Serialize, format!("Failed to write catalog JSON: {e}"))
    })?;
    writer.flush().map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to write catalog JSON '{}': {e}", path.display()),
        )
    })?;

    debug!(path = %path.display(), records = catalog.star_systems.len(), "catalog written");
    Ok(())
}

/// Read a catalog JSON file.
pub fn read_catalog(path: &Path) -> Result<StarCatalog, AppError> {
    let file = File::open(path).map_err(|e| AppError::open(path, "open catalog JSON", e))?;
    let catalog: StarCatalog = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(ErrorKind::Parse, format!("Invalid catalog JSON: {e}")))?;
    debug!(path = %path.display(), records = catalog.star_systems.len(), "catalog read");
    Ok(catalog)
}
