//! CSV loader for the dataset file.

use super::row::{GameRow, RawRecord};
use crate::utils::error::DatasetError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load every row of the dataset file
///
/// **Public** - used by the cache on first access
///
/// # Errors
/// * `DatasetError::Io` - file missing or unreadable
/// * `DatasetError::Csv` - file is not valid CSV
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<GameRow>, DatasetError> {
    let path = path.as_ref();

    info!("Loading dataset from: {}", path.display());

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = parse_rows(BufReader::new(file))?;

    info!("Loaded {} rows", rows.len());

    Ok(rows)
}

/// Parse CSV content with a header row into decoded rows
///
/// Columns are matched by header name, so their order is irrelevant.
/// Columns the dataset lacks decode as empty cells.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<GameRow>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns = reader.headers()?.len();
    debug!("Dataset header has {} columns", columns);

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        rows.push(GameRow::from(record?));
    }

    Ok(rows)
}
