//! Theil-Sen robust line estimator.
//!
//! ## Purpose
//!
//! This module fits a line whose slope is the median of all pairwise slopes
//! and whose intercept is the median of the per-point intercepts implied by
//! that slope. Medians make the fit resistant to outliers: up to ~29% of
//! the points can be corrupted before the slope estimate breaks down.
//!
//! ## Design notes
//!
//! * **Pair enumeration**: All C(n, 2) unordered pairs (i, j) with i < j,
//!   counted up front with the multiplicative binomial formula to size the
//!   slope buffer exactly.
//! * **Tie-break rule**: Both medians use the shared odd/even convention
//!   from the math layer (middle element, or mean of the two middles).
//! * **Zero denominators**: Two points sharing an x-value make a pairwise
//!   slope undefined. The guard stays even though callers reject duplicate
//!   x-values before reaching this module.
//!
//! ## Invariants
//!
//! * The slope buffer holds exactly C(n, 2) entries before the median.
//! * The intercept buffer holds exactly n entries before the median.
//!
//! ## Non-goals
//!
//! * This module does not compute r-squared, means, or deviations; the
//!   engine combines the robust line with ordinary statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::wls::LineFit;
use crate::math::median::median_in_place;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Binomial Coefficient
// ============================================================================

/// Compute C(n, k) with the multiplicative formula.
///
/// Multiplies before dividing: the running product of i consecutive factors
/// is always divisible by i!, so every intermediate stays integral and the
/// factorials that would overflow are never formed.
#[inline]
pub fn binomial(n: usize, k: usize) -> usize {
    debug_assert!(k <= n, "binomial: k must not exceed n");

    // Symmetry keeps the loop short
    let k = k.min(n - k);

    let mut b: usize = 1;
    let mut m = n;
    for i in 1..=k {
        b = b * m / i;
        m -= 1;
    }
    b
}

// ============================================================================
// Theil-Sen Fit
// ============================================================================

/// Fit a line by the Theil-Sen estimator.
///
/// 1. slope = median of (y_j - y_i) / (x_j - x_i) over all pairs i < j.
/// 2. intercept = median of y_i - slope * x_i over all points.
///
/// Fails with [`RegressionError::UndefinedSlope`] if any pair shares an
/// x-value. Callers guarantee n >= 2 through validation.
pub fn fit_theil_sen<T: Float>(x: &[T], y: &[T]) -> Result<LineFit<T>, RegressionError> {
    let n = x.len();

    let pair_count = binomial(n, 2);
    let mut slopes: Vec<T> = Vec::with_capacity(pair_count);

    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[j] - x[i];
            if dx == T::zero() {
                return Err(RegressionError::UndefinedSlope {
                    x: x[i].to_f64().unwrap_or(f64::NAN),
                });
            }
            slopes.push((y[j] - y[i]) / dx);
        }
    }
    debug_assert_eq!(slopes.len(), pair_count);

    let slope = median_in_place(&mut slopes);

    let mut intercepts: Vec<T> = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| yi - slope * xi)
        .collect();
    let intercept = median_in_place(&mut intercepts);

    Ok(LineFit { slope, intercept })
}
