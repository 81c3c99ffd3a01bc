//! Dataset preparation defaults
//!
//! The binaries fall back to these values when no arguments are given.

// =============================================================================
// Concatenation / export defaults
// =============================================================================

/// Default Parquet input files, read from the working directory in this order
pub const DEFAULT_INPUT_FILES: [&str; 4] =
    ["a.parquet", "b.parquet", "c.parquet", "d.parquet"];

/// Default JSON Lines output path
pub const DEFAULT_OUTPUT_PATH: &str = "output_file.json";

// =============================================================================
// Fragment enumeration defaults
// =============================================================================

/// Default fragment groups: 4-byte substring fragments of the query terms,
/// one group per term
pub const DEFAULT_FRAGMENT_GROUPS: [&[&str]; 3] = [
    &["lord", "ord ", "rd o"],
    &["puti", "utin"],
    &["trum", "rump"],
];
