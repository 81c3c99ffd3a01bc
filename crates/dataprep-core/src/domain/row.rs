//! Row model for tabular data
//!
//! A row is one record of a tabular dataset, mapping column names to cell
//! values. Rows keep exactly the columns their source file defines.

use serde_json::{Map, Value};
use thiserror::Error;

/// One record: column name -> cell value, in column order
pub type Row = Map<String, Value>;

/// Errors raised by the concatenation/export pipeline
///
/// Every failure terminates the run; there is no retry and no partial
/// output beyond whatever was already written.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Parquet decode error
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    /// Arrow record batch error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),
    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse newline-delimited JSON into rows
///
/// Each JSON object in the input becomes one row; order is preserved.
/// Whitespace (including blank lines) between objects is skipped.
pub fn rows_from_jsonl(bytes: &[u8]) -> Result<Vec<Row>, serde_json::Error> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Row>()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_from_jsonl_order() {
        let input = b"{\"a\":1}\n{\"a\":2}\n{\"a\":3}\n";
        let rows = rows_from_jsonl(input).expect("Failed to parse");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["a"], json!(1));
        assert_eq!(rows[1]["a"], json!(2));
        assert_eq!(rows[2]["a"], json!(3));
    }

    #[test]
    fn test_rows_from_jsonl_empty() {
        let rows = rows_from_jsonl(b"").expect("Failed to parse");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_rows_from_jsonl_blank_lines() {
        let input = b"{\"a\":1}\n\n{\"a\":2}\n";
        let rows = rows_from_jsonl(input).expect("Failed to parse");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_rows_from_jsonl_mixed_columns() {
        let input = b"{\"a\":1}\n{\"b\":\"x\"}\n";
        let rows = rows_from_jsonl(input).expect("Failed to parse");

        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(rows[1].keys().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_rows_from_jsonl_invalid() {
        let result = rows_from_jsonl(b"{\"a\":1}\nnot json\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rows_from_jsonl_non_object() {
        let result = rows_from_jsonl(b"[1,2,3]\n");
        assert!(result.is_err());
    }
}
