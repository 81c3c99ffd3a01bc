//! JSON Lines output
//!
//! This module serializes rows as newline-delimited JSON, one object per
//! line, in sequence order.

use crate::domain::row::{ExportError, Row};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write rows to a writer as JSON Lines
pub fn write_rows_to<W: Write>(writer: &mut W, rows: &[Row]) -> Result<(), ExportError> {
    for row in rows {
        let line = serde_json::to_string(row)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write rows to a file as JSON Lines
pub fn write_rows(path: impl AsRef<Path>, rows: &[Row]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_rows_to(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}
