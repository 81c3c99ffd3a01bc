//! Combination emission workflow
//!
//! This module composes the combination pipeline and emits every
//! combination as one line per combination, in generation order.

use crate::domain::combine::enumerate_combinations;
use std::fmt::Debug;
use std::io::{self, Write};

/// Number of combinations the given groups will produce
///
/// For groups of sizes n1..nk this is the product of (2^ni - 1). An empty
/// group list, or any empty group, yields zero.
pub fn expected_combination_count<T>(groups: &[Vec<T>]) -> u128 {
    if groups.is_empty() {
        return 0;
    }

    groups
        .iter()
        .map(|group| (1u128 << group.len()) - 1)
        .product()
}

/// Emit every combination to `writer`, one per line
///
/// Returns the number of combinations emitted.
pub fn emit_combinations<T, W>(groups: &[Vec<T>], writer: &mut W) -> io::Result<usize>
where
    T: Clone + Debug,
    W: Write,
{
    let combinations = enumerate_combinations(groups);

    for combination in &combinations {
        writeln!(writer, "{:?}", combination)?;
    }

    Ok(combinations.len())
}
