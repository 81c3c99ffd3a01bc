//! Parquet file input
//!
//! This module reads one Parquet file into rows. Record batches are
//! rendered through Arrow's JSON Lines writer and parsed back, so cell
//! values carry whatever JSON representation Arrow gives the column type.

use crate::domain::row::{ExportError, Row, rows_from_jsonl};
use arrow_json::writer::{LineDelimited, WriterBuilder};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Load all rows of a Parquet file, in file order
///
/// Null cells are kept as explicit JSON nulls. Any open or decode failure
/// propagates immediately.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Row>, ExportError> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut writer = WriterBuilder::new()
        .with_explicit_nulls(true)
        .build::<_, LineDelimited>(Vec::new());

    for batch in reader {
        let batch = batch?;
        writer.write(&batch)?;
    }
    writer.finish()?;

    let rows = rows_from_jsonl(&writer.into_inner())?;
    Ok(rows)
}
