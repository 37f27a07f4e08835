//! Unweighted sample moments.
//!
//! ## Purpose
//!
//! This module computes the unweighted means and sample standard deviations
//! of a dataset. Every global estimator reports these alongside its fitted
//! line, and they stay unweighted even for weighted fits so that r-squared
//! keeps an interpretable normalization.
//!
//! ## Design notes
//!
//! * **Two-pass**: Means first, then squared deviations from the means.
//!   This avoids the cancellation of the E[x^2] - mean^2 shortcut.
//! * **Sample convention**: Variances divide by n - 1; callers guarantee
//!   n >= 2 through validation.
//!
//! ## Non-goals
//!
//! * This module does not compute weighted moments or robust scale.

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample Moments
// ============================================================================

/// Unweighted means and sample standard deviations of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleMoments<T> {
    /// Mean of the x-values.
    pub mean_x: T,

    /// Mean of the y-values.
    pub mean_y: T,

    /// Sample standard deviation of the x-values (n - 1 denominator).
    pub stddev_x: T,

    /// Sample standard deviation of the y-values (n - 1 denominator).
    pub stddev_y: T,
}

impl<T: Float> SampleMoments<T> {
    /// Compute the moments of a dataset in two passes.
    pub fn compute(x: &[T], y: &[T]) -> Self {
        let n = x.len();
        let n_t = T::from(n).unwrap_or_else(T::one);

        // Pass 1: means
        let mut sum_x = T::zero();
        let mut sum_y = T::zero();
        for i in 0..n {
            sum_x = sum_x + x[i];
            sum_y = sum_y + y[i];
        }
        let mean_x = sum_x / n_t;
        let mean_y = sum_y / n_t;

        // Pass 2: squared deviations
        let mut ss_x = T::zero();
        let mut ss_y = T::zero();
        for i in 0..n {
            let dx = x[i] - mean_x;
            let dy = y[i] - mean_y;
            ss_x = ss_x + dx * dx;
            ss_y = ss_y + dy * dy;
        }

        let dof = n_t - T::one();
        SampleMoments {
            mean_x,
            mean_y,
            stddev_x: (ss_x / dof).sqrt(),
            stddev_y: (ss_y / dof).sqrt(),
        }
    }
}
