use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("no columns found in header row")]
    NoColumns,
}

/// Reads only the header row of a CSV file; row contents are never touched.
pub fn read_header(path: &Path) -> Result<Vec<String>, HeaderError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(HeaderError::NoColumns);
    }
    Ok(columns)
}
