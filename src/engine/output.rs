//! Output types and result structures for regression operations.
//!
//! ## Purpose
//!
//! This module defines the result structs returned by the fitting engine:
//! `SampleStatistics` for descriptive statistics and fit coefficients,
//! `LinearResult` for global fits, and `LoessResult` for local fits.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Consistency**: Sorted x-values are stored to maintain correspondence
//!   between local coefficients and the points they belong to.
//!
//! ## Key concepts
//!
//! * **Statistics Panel**: Every fit reports slope, intercept, R^2, and the
//!   unweighted means and standard deviations of the raw data.
//! * **Plot Line**: Global fits carry the two endpoints of the fitted line,
//!   evaluated at the smallest and largest x.
//! * **Local Coefficients**: Local fits carry one (slope, intercept) pair
//!   per data point rather than smoothed y-values, so callers can evaluate
//!   the local line anywhere near each point.
//!
//! ## Invariants
//!
//! * `x`, `slopes`, and `intercepts` in `LoessResult` have equal lengths.
//! * x-values are sorted in monotonically increasing order.
//! * `LinearResult::line` holds exactly two points with `line[0].x <= line[1].x`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the engine).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::wls::LineFit;
use crate::primitives::window::Window;

// ============================================================================
// Sample Statistics
// ============================================================================

/// Fit coefficients and descriptive statistics for a regression.
///
/// The means and standard deviations always describe the raw sample,
/// ignoring any observation weights, so that weighted and unweighted fits
/// of the same data report identical descriptive statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Unweighted mean of the x-values.
    pub mean_x: T,

    /// Unweighted mean of the y-values.
    pub mean_y: T,

    /// Sample standard deviation of the x-values (n - 1 denominator).
    pub stddev_x: T,

    /// Sample standard deviation of the y-values (n - 1 denominator).
    pub stddev_y: T,
}

impl<T: Float> SampleStatistics<T> {
    /// The fitted line as a standalone coefficient pair.
    pub fn line_fit(&self) -> LineFit<T> {
        LineFit {
            slope: self.slope,
            intercept: self.intercept,
        }
    }
}

impl<T: Float + Display> Display for SampleStatistics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Slope:        {:.6}", self.slope)?;
        writeln!(f, "  Intercept:    {:.6}", self.intercept)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Mean of x:    {:.6}", self.mean_x)?;
        writeln!(f, "  Mean of y:    {:.6}", self.mean_y)?;
        writeln!(f, "  Std dev of x: {:.6}", self.stddev_x)?;
        writeln!(f, "  Std dev of y: {:.6}", self.stddev_y)?;
        Ok(())
    }
}

// ============================================================================
// Plot Point
// ============================================================================

/// A single (x, y) coordinate on a fitted line or curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint<T> {
    /// Horizontal coordinate.
    pub x: T,

    /// Vertical coordinate.
    pub y: T,
}

// ============================================================================
// Linear Result
// ============================================================================

/// Output of a global (simple, weighted, or robust) linear fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearResult<T> {
    /// Number of data points in the fit.
    pub n: usize,

    /// Fit coefficients and descriptive statistics.
    pub statistics: SampleStatistics<T>,

    /// Endpoints of the fitted line at the smallest and largest x.
    pub line: [PlotPoint<T>; 2],
}

impl<T: Float + Display + Debug> Display for LinearResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n)?;
        writeln!(f)?;
        write!(f, "{}", self.statistics)?;
        writeln!(f)?;
        writeln!(f, "Fitted Line:")?;
        writeln!(
            f,
            "  ({:.6}, {:.6}) -> ({:.6}, {:.6})",
            self.line[0].x, self.line[0].y, self.line[1].x, self.line[1].y
        )?;
        Ok(())
    }
}

// ============================================================================
// Loess Result
// ============================================================================

/// Output of a local regression over sorted data.
#[derive(Debug, Clone, PartialEq)]
pub struct LoessResult<T> {
    /// Sorted x-values (independent variable).
    pub x: Vec<T>,

    /// Local slope at each x-value.
    pub slopes: Vec<T>,

    /// Local intercept at each x-value.
    pub intercepts: Vec<T>,

    /// Global statistics of the same data, from an unweighted linear fit.
    pub statistics: SampleStatistics<T>,

    /// Smoothing fraction used for the fit.
    pub fraction_used: T,
}

impl<T: Float> LoessResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of fitted points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The local line at point `i` as a standalone coefficient pair.
    pub fn local_line(&self, i: usize) -> LineFit<T> {
        LineFit {
            slope: self.slopes[i],
            intercept: self.intercepts[i],
        }
    }

    /// Evaluate each local line at its own x-value, yielding the smooth curve.
    pub fn points(&self) -> Vec<PlotPoint<T>> {
        self.x
            .iter()
            .zip(self.slopes.iter())
            .zip(self.intercepts.iter())
            .map(|((&x, &slope), &intercept)| PlotPoint {
                x,
                y: slope * x + intercept,
            })
            .collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for LoessResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let n = self.x.len();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", n)?;
        writeln!(f, "  Fraction:    {}", self.fraction_used)?;
        writeln!(f, "  Window span: {}", Window::span(n, self.fraction_used))?;
        writeln!(f)?;

        write!(f, "{}", self.statistics)?;
        writeln!(f)?;

        writeln!(f, "Local Fits:")?;

        // Build header
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12}",
            "X", "Slope", "Intercept", "Y_local"
        )?;

        // Separator line
        writeln!(f, "{:-<width$}", "", width = 47)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            let y_local = self.slopes[idx] * self.x[idx] + self.intercepts[idx];
            writeln!(
                f,
                "{:>8.2} {:>12.6} {:>12.6} {:>12.6}",
                self.x[idx], self.slopes[idx], self.intercepts[idx], y_local
            )?;
        }

        Ok(())
    }
}
