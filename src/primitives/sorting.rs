//! Sorting utilities for regression input data.
//!
//! ## Purpose
//!
//! This module provides utilities for sorting input data by x-coordinates,
//! detecting duplicate x-values, and carrying parallel vectors (such as
//! weights) through the same permutation.
//!
//! ## Design notes
//!
//! * **Non-mutating**: Caller slices are borrowed; sorting produces owned copies.
//! * **Stability**: Uses stable sorting, so equal x-values keep their relative
//!   order for the duplicate scan that follows.
//! * **Efficiency**: A fast path recognizes already-sorted input and skips the sort.
//!
//! ## Key concepts
//!
//! ### Sort-Check-Fit Pattern
//! 1. **Sort**: Input data is sorted by x-coordinates, creating an index mapping.
//! 2. **Check**: Adjacent equal x-values are rejected as duplicates.
//! 3. **Fit**: Regression operates on the sorted, duplicate-free sequence.
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing.
//! * The index mapping is a valid permutation of `0..n`.
//! * After a successful duplicate check, x-values are strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness or lengths (see the engine validator).
//! * This module does not perform any regression calculation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Data Structures
// ============================================================================

/// Result of sorting input data by x-coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedDataset<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates reordered to match sorted x-coordinates.
    pub y: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort input data by x-coordinates in ascending order.
///
/// 1. Checks if data is already sorted (fast path).
/// 2. Pairs x with original indices.
///    - Only x and index are sorted to keep the tuple size small.
///    - This reduces data movement during sorting.
/// 3. Performs a stable sort.
/// 4. Extracts sorted arrays and the permutation mapping.
#[inline]
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> SortedDataset<T> {
    let n = x.len();

    // Fast path: check if data is already sorted by x
    let is_sorted = x.windows(2).all(|w| w[0] <= w[1]);
    if is_sorted {
        return SortedDataset {
            x: x.to_vec(),
            y: y.to_vec(),
            indices: (0..n).collect(),
        };
    }

    // Create tuples of (x_value, original_index)
    let mut pairs: Vec<(T, usize)> = x.iter().enumerate().map(|(i, &xi)| (xi, i)).collect();

    // Stable sort to preserve order of equal x values for determinism
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    // Extract sorted components
    SortedDataset {
        x: pairs.iter().map(|p| p.0).collect(),
        y: pairs.iter().map(|p| y[p.1]).collect(),
        indices: pairs.iter().map(|p| p.1).collect(),
    }
}

/// Scan a sorted x-sequence for adjacent equal values.
///
/// Duplicate x-values are fatal for every ordering-dependent algorithm in the
/// crate: the pairwise slopes of the robust estimator divide by x-differences,
/// and the local regression windows assume strictly increasing x. The scan
/// runs on the sorted sequence, so any duplicate pair is adjacent.
#[inline]
pub fn check_distinct_x<T: Float>(sorted_x: &[T]) -> Result<(), RegressionError> {
    for w in sorted_x.windows(2) {
        if w[0] == w[1] {
            return Err(RegressionError::DuplicateX {
                value: w[0].to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}

/// Reorder a parallel vector (e.g., weights) through the sort permutation.
///
/// `indices` comes from [`sort_by_x`]; element `k` of the output is
/// `values[indices[k]]`, so the result lines up with the sorted dataset.
#[inline]
pub fn apply_permutation<T: Float>(values: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&orig_idx| values[orig_idx]).collect()
}
