//! Execution engine for regression operations.
//!
//! ## Purpose
//!
//! This module orchestrates the lower-level algorithms into full fits. It
//! provides the three global estimators (simple, weighted, robust) over a
//! sorted dataset, the endpoint computation for plotting a fitted line, and
//! the sliding-window loop of the local regression.
//!
//! ## Design notes
//!
//! * Separates concerns: the WLS accumulation/solve, the descriptive
//!   moments, and the robust slope live in the algorithms layer; this
//!   module only sequences them.
//! * The simple estimator delegates to the weighted estimator with unit
//!   weights, so the two are bit-identical on the same data.
//! * The local regression advances a fixed-size window one point at a time
//!   and refits a weighted line per output index; windows never shrink at
//!   the boundaries, only the kernel center moves.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Descriptive statistics**: means and standard deviations are always
//!   computed from the raw, unweighted sample, even for weighted fits, so
//!   r^2 has a fixed normalization across estimators.
//! * **Robust mixing**: the robust estimator replaces only the slope and
//!   intercept; r^2, means, and standard deviations still come from the
//!   ordinary fit of the same data. Callers should treat the robust r^2 as
//!   a descriptive figure, not a goodness-of-fit for the robust line.
//! * **Window phases**: the local regression runs an initial phase (fixed
//!   leading window, moving center), a sliding phase (moving window, fixed
//!   center at the second-to-last position), and a tail phase (fixed
//!   trailing window, two-case center).
//!
//! ## Invariants
//!
//! * Input x-values are assumed to be monotonically increasing (sorted).
//! * Weight slices have the same length as the data they weight.
//! * Every output index of the local regression receives exactly one
//!   (slope, intercept) pair.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (caller's responsibility).
//! * This module does not detect duplicate x-values (caller's responsibility).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moments::SampleMoments;
use crate::algorithms::theilsen::fit_theil_sen;
use crate::algorithms::wls::{solve_wls, LineFit, WlsSolver};
use crate::engine::output::{LoessResult, PlotPoint, SampleStatistics};
use crate::math::kernel::tricube_weights;
use crate::primitives::errors::RegressionError;
use crate::primitives::sorting::SortedDataset;
use crate::primitives::window::Window;

// ============================================================================
// Line Fitting Primitive
// ============================================================================

/// Fit a weighted least-squares line to raw slices.
///
/// This is the per-window primitive shared by the global estimators and the
/// local regression loop. Slices must have equal lengths.
pub fn fit_line<T>(x: &[T], y: &[T], weights: &[T]) -> Result<LineFit<T>, RegressionError>
where
    T: Float + WlsSolver,
{
    let sums = T::accumulate_wls(x, y, weights);
    solve_wls(&sums)
}

// ============================================================================
// Global Estimators
// ============================================================================

/// Weighted linear regression over a sorted dataset.
///
/// Produces the full statistics record: the weighted least-squares slope and
/// intercept, r^2 derived from the slope and the unweighted standard
/// deviations, and the unweighted means and standard deviations themselves.
pub fn wlr<T>(
    sorted: &SortedDataset<T>,
    weights: &[T],
) -> Result<SampleStatistics<T>, RegressionError>
where
    T: Float + WlsSolver,
{
    let moments = SampleMoments::compute(&sorted.x, &sorted.y);
    let line = fit_line(&sorted.x, &sorted.y, weights)?;

    // r = slope * (sd_x / sd_y); a vertical spread of zero propagates
    // (0/0 or x/0) rather than erroring.
    let r = line.slope * (moments.stddev_x / moments.stddev_y);

    Ok(SampleStatistics {
        slope: line.slope,
        intercept: line.intercept,
        r_squared: r * r,
        mean_x: moments.mean_x,
        mean_y: moments.mean_y,
        stddev_x: moments.stddev_x,
        stddev_y: moments.stddev_y,
    })
}

/// Simple (ordinary) linear regression over a sorted dataset.
///
/// Delegates to [`wlr`] with unit weights, so a simple fit and a weighted
/// fit with all-ones weights produce bit-identical results.
pub fn slr<T>(sorted: &SortedDataset<T>) -> Result<SampleStatistics<T>, RegressionError>
where
    T: Float + WlsSolver,
{
    let weights = vec![T::one(); sorted.x.len()];
    wlr(sorted, &weights)
}

/// Robust (Theil-Sen) linear regression over a sorted dataset.
///
/// The slope and intercept come from the median-of-slopes estimator; the
/// remaining five fields come from an ordinary fit of the same data, so
/// r^2, means, and standard deviations are the non-robust figures.
pub fn rlr<T>(sorted: &SortedDataset<T>) -> Result<SampleStatistics<T>, RegressionError>
where
    T: Float + WlsSolver,
{
    let robust = fit_theil_sen(&sorted.x, &sorted.y)?;
    let mut statistics = slr(sorted)?;

    statistics.slope = robust.slope;
    statistics.intercept = robust.intercept;

    Ok(statistics)
}

// ============================================================================
// Line Endpoints
// ============================================================================

/// Evaluate a fitted line at the smallest and largest x-values.
///
/// `sorted_x` must be non-empty and sorted ascending; the endpoints are its
/// first and last elements.
pub fn line_endpoints<T: Float>(sorted_x: &[T], statistics: &SampleStatistics<T>) -> [PlotPoint<T>; 2] {
    debug_assert!(!sorted_x.is_empty());

    let line = statistics.line_fit();
    let x_min = sorted_x[0];
    let x_max = sorted_x[sorted_x.len() - 1];

    [
        PlotPoint {
            x: x_min,
            y: line.predict(x_min),
        },
        PlotPoint {
            x: x_max,
            y: line.predict(x_max),
        },
    ]
}

// ============================================================================
// Local Regression Executor
// ============================================================================

/// Executor for local (LOESS) regression over a sorted dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoessExecutor<T> {
    /// Fraction of the dataset used per window, in [0, 1].
    pub fraction: T,
}

impl<T> LoessExecutor<T>
where
    T: Float + WlsSolver,
{
    /// Run the local regression, producing one local line per data point.
    ///
    /// The dataset must be sorted with distinct x-values and hold at least
    /// [`Window::MIN_SPAN`] points.
    pub fn run(&self, sorted: &SortedDataset<T>) -> Result<LoessResult<T>, RegressionError> {
        let n = sorted.x.len();
        let span = Window::span(n, self.fraction);
        debug_assert!(span <= n);

        // Side statistics from an ordinary fit of the whole dataset. Only
        // the means and standard deviations are meaningful for a local fit;
        // the global slope, intercept, and r^2 are reported as-is.
        let statistics = slr(sorted)?;

        let mut slopes = vec![T::zero(); n];
        let mut intercepts = vec![T::zero(); n];

        // Initial phase: the leading window stays fixed while the kernel
        // center walks from its first to its second-to-last point.
        let leading = Window::leading(span);
        for i in 0..span - 1 {
            let fit = self.fit_window(sorted, leading, i)?;
            slopes[i] = fit.slope;
            intercepts[i] = fit.intercept;
        }

        // Sliding phase: the window advances one point per output index with
        // the center pinned to its second-to-last point. Once the window
        // would run past the data, it freezes to the trailing points and
        // only the center moves (tail phase).
        let mut offset = 1;
        for i in span - 1..n {
            let (window, center) = if offset + span <= n {
                let window = Window::at_offset(offset, span);
                offset += 1;
                (window, span - 2)
            } else if i == n - 1 {
                (Window::trailing(n, span), span - 1)
            } else {
                (Window::trailing(n, span), span - 2)
            };

            let fit = self.fit_window(sorted, window, center)?;
            slopes[i] = fit.slope;
            intercepts[i] = fit.intercept;
        }

        Ok(LoessResult {
            x: sorted.x.clone(),
            slopes,
            intercepts,
            statistics,
            fraction_used: self.fraction,
        })
    }

    /// Fit a tricube-weighted line to one window of the sorted dataset.
    fn fit_window(
        &self,
        sorted: &SortedDataset<T>,
        window: Window,
        center: usize,
    ) -> Result<LineFit<T>, RegressionError> {
        debug_assert!(center < window.len());

        let x_window = window.slice(&sorted.x);
        let y_window = window.slice(&sorted.y);
        let weights: Vec<T> = tricube_weights(x_window, center);

        fit_line(x_window, y_window, &weights)
    }
}
