//! Concatenation and export workflow
//!
//! This module loads an ordered list of Parquet files, concatenates their
//! rows in list order, and writes the combined table as JSON Lines.

use crate::domain::row::{ExportError, Row};
use crate::infra::jsonl_io::write_rows;
use crate::infra::parquet_io::load_rows;
use std::path::Path;

/// Result report of a completed export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of input files read
    pub files: usize,
    /// Number of rows written
    pub rows: usize,
}

/// Load every input file and append its rows to one combined sequence
///
/// Rows keep their in-file order; files contribute in list order. No
/// deduplication, no sorting, no schema reconciliation is performed.
pub fn load_concatenated<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Row>, ExportError> {
    let mut combined = Vec::new();

    for path in paths {
        let rows = load_rows(path)?;
        combined.extend(rows);
    }

    Ok(combined)
}

/// Load with a per-file callback
///
/// The callback receives each input path and the number of rows it
/// contributed, after that file has been read.
pub fn load_concatenated_with_progress<P, F>(
    paths: &[P],
    mut on_file: F,
) -> Result<Vec<Row>, ExportError>
where
    P: AsRef<Path>,
    F: FnMut(&Path, usize),
{
    let mut combined = Vec::new();

    for path in paths {
        let rows = load_rows(path)?;
        on_file(path.as_ref(), rows.len());
        combined.extend(rows);
    }

    Ok(combined)
}

/// Concatenate the inputs and write the combined table to `output`
///
/// Fails fast on the first unreadable or malformed input; nothing is
/// retried.
pub fn export_concatenated<P: AsRef<Path>>(
    inputs: &[P],
    output: impl AsRef<Path>,
) -> Result<ExportSummary, ExportError> {
    let rows = load_concatenated(inputs)?;
    write_rows(output, &rows)?;

    Ok(ExportSummary {
        files: inputs.len(),
        rows: rows.len(),
    })
}
