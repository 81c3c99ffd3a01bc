//! Fragment combination logic
//!
//! This module provides the three pure steps of the enumeration pipeline:
//! per-group subsequence enumeration, the Cartesian product of the choices,
//! and flattening one choice into a single combination. Each step yields a
//! deterministic order, so the emitted combination order is a checkable
//! contract.

use itertools::Itertools;

/// Enumerate all non-empty subsequences of `items`
///
/// Subsequences are yielded by increasing size (size 1 first, up to the
/// full slice), and within each size in combinatorial index order. Each
/// subsequence preserves the relative order of its elements in `items`.
///
/// A slice of length n yields 2^n - 1 subsequences.
pub fn non_empty_subsequences<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    (1..=items.len())
        .flat_map(|size| items.iter().cloned().combinations(size))
        .collect()
}

/// Enumerate every way of choosing one non-empty subsequence per group
///
/// The product is iterated with the first group varying slowest and the
/// last group varying fastest. An empty group list, or any empty group,
/// yields no choices.
pub fn subset_choices<T: Clone>(groups: &[Vec<T>]) -> Vec<Vec<Vec<T>>> {
    if groups.is_empty() || groups.iter().any(|group| group.is_empty()) {
        return Vec::new();
    }

    groups
        .iter()
        .map(|group| non_empty_subsequences(group))
        .multi_cartesian_product()
        .collect()
}

/// Flatten one choice (one subsequence per group) into a single combination
pub fn flatten_choice<T: Clone>(choice: &[Vec<T>]) -> Vec<T> {
    choice.iter().flatten().cloned().collect()
}

/// Enumerate all flattened combinations for the given fragment groups
///
/// Combinations are produced in the order of `subset_choices`. Choices
/// that flatten to identical sequences are all kept; no deduplication or
/// filtering is applied.
pub fn enumerate_combinations<T: Clone>(groups: &[Vec<T>]) -> Vec<Vec<T>> {
    subset_choices(groups)
        .into_iter()
        .map(|choice| flatten_choice(&choice))
        .collect()
}
