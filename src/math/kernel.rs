//! Tricube kernel for local regression weighting.
//!
//! ## Purpose
//!
//! This module provides the tricube weight function used by the local
//! regression engine. It maps scaled distances from a window's center point
//! to weights, controlling the influence of neighboring points on each
//! local fit.
//!
//! ## Design notes
//!
//! * **Normalization**: Distances are scaled by the maximum distance within
//!   the window, so the farthest point always receives weight zero.
//! * **Support**: The kernel is bounded; scaled distances at or beyond 1
//!   return exactly zero.
//! * **NaN propagation**: When every point in a window shares the center's
//!   x-value, the maximum distance is zero and the 0/0 scaling produces NaN
//!   weights. This is deliberate and not clamped; callers that enforce
//!   distinct x-values never reach it.
//!
//! ## Key concepts
//!
//! * **Tricube**: K(d) = (1 - d^3)^3 for d in [0, 1), 0 otherwise
//!   (Cleveland's original kernel), smooth and efficient.
//! * **Center weighting**: The center point is at distance 0 and always
//!   receives full weight 1.
//!
//! ## Invariants
//!
//! * Weights are nonnegative for finite scaled distances.
//! * `tricube(0) == 1` and `tricube(d) == 0` for `d >= 1`.
//!
//! ## Non-goals
//!
//! * This module does not perform weight normalization.
//! * This module does not select window bounds or centers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Kernel Function
// ============================================================================

/// Evaluate the tricube kernel at a scaled distance.
///
/// `d` is expected to be a nonnegative scaled distance. Values at or beyond
/// the kernel support return exactly zero; NaN input propagates to NaN
/// output because the support comparison fails.
#[inline]
pub fn tricube<T: Float>(d: T) -> T {
    if d >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - d * d * d;
    tmp * tmp * tmp
}

// ============================================================================
// Window Weighting
// ============================================================================

/// Compute tricube weights for a window centered at a local index.
///
/// Each point's distance from the center is scaled by the maximum distance
/// in the window before the kernel is applied:
///
/// 1. distance_i = |x_i - x_center|
/// 2. scaled_i = distance_i / max(distance)
/// 3. weight_i = tricube(scaled_i)
///
/// The center receives weight 1 and the farthest point weight 0. If the
/// maximum distance is zero the scaling is 0/0 and every weight is NaN;
/// see the module documentation.
#[inline]
pub fn tricube_weights<T: Float>(x: &[T], center: usize) -> Vec<T> {
    debug_assert!(center < x.len(), "tricube_weights: center out of bounds");

    let x_center = x[center];

    // Pass 1: maximum absolute distance from the center
    let mut max_dist = T::zero();
    for &xi in x {
        let d = (xi - x_center).abs();
        if d > max_dist {
            max_dist = d;
        }
    }

    // Pass 2: scale and apply the kernel
    x.iter()
        .map(|&xi| tricube((xi - x_center).abs() / max_dist))
        .collect()
}
