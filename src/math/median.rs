//! Median computation for the robust estimator.
//!
//! ## Purpose
//!
//! This module provides the median used by the Theil-Sen estimator for both
//! the pairwise-slope and per-point-intercept aggregations.
//!
//! ## Design notes
//!
//! * **Quickselect**: Uses `select_nth_unstable_by` for O(n) expected time
//!   instead of a full sort.
//! * **Tie-break rule**: Odd lengths take the single middle element; even
//!   lengths average the two middle elements (0-based order statistics
//!   n/2 - 1 and n/2).
//! * **In-place**: The input buffer is partially reordered; callers own the
//!   buffer and never read it back.
//!
//! ## Invariants
//!
//! * The result equals the middle element (odd) or the mean of the two
//!   middle elements (even) of the ascending-sorted input.
//!
//! ## Non-goals
//!
//! * This module does not compute robust scale estimates or quantiles
//!   other than the median.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Median
// ============================================================================

/// Compute the median of a slice in-place using quickselect.
///
/// Returns zero for an empty slice; callers validate non-emptiness upstream.
#[inline]
pub fn median_in_place<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: average of the two middle order statistics
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        // Largest value in the lower partition is the (mid - 1)-th statistic
        let mut lower = vals[0];
        let mut i = 1;
        while i < mid {
            if vals[i] > lower {
                lower = vals[i];
            }
            i += 1;
        }

        (lower + upper) / T::from(2.0).unwrap_or(T::one() + T::one())
    } else {
        // Odd length: middle value
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        vals[mid]
    }
}
