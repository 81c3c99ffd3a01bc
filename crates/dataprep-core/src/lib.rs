//! dataprep-core - Dataset preparation library
//!
//! This crate provides functionality to:
//! - Concatenate Parquet files row-wise and export them as JSON Lines
//! - Enumerate fragment combinations (one non-empty subsequence per group,
//!   concatenated across groups)

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use domain::combine::{enumerate_combinations, non_empty_subsequences};
pub use domain::row::{ExportError, Row};
pub use app::export::{ExportSummary, export_concatenated};
