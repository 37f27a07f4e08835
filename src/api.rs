//! High-level API for fitting regression models.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements
//! a fluent builder pattern for configuring a global linear fit (simple,
//! weighted, or robust) or a local regression, validating the configuration
//! at build time and the data at fit time.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated during `build()`, data during
//!   `fit()`, so an invalid model can never run.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Estimator Selection**: [`Estimator::Simple`] (default),
//!   [`Estimator::Weighted`] (requires weights), [`Estimator::Robust`]
//!   (Theil-Sen median of pairwise slopes).
//! * **Configuration Flow**: builder, then `.build()` into an immutable
//!   model, then `.fit(&x, &y)` for the result.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LinearBuilder`] or [`LoessBuilder`] via `new()`.
//! 2. Chain configuration methods (`.estimator()`, `.weights()`, `.fraction()`).
//! 3. Call `.build()` to validate and obtain the model, then `.fit(&x, &y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::wls::WlsSolver;
use crate::engine::executor::{line_endpoints, rlr, slr, wlr, LoessExecutor};
use crate::engine::validator::Validator;
use crate::primitives::sorting::{apply_permutation, check_distinct_x, sort_by_x};

// Publicly re-exported types
pub use crate::algorithms::wls::LineFit;
pub use crate::engine::output::{LinearResult, LoessResult, PlotPoint, SampleStatistics};
pub use crate::primitives::errors::RegressionError;

// ============================================================================
// Estimator Selection
// ============================================================================

/// Estimator used for a global linear fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Estimator {
    /// Ordinary least squares with equal weights.
    #[default]
    Simple,

    /// Weighted least squares with caller-supplied nonnegative weights.
    Weighted,

    /// Theil-Sen median-of-slopes estimator, resistant to outliers.
    Robust,
}

// ============================================================================
// Linear Builder
// ============================================================================

/// Fluent builder for configuring a global linear fit.
#[derive(Debug, Clone)]
pub struct LinearBuilder<T> {
    /// Estimator to use (default: [`Estimator::Simple`]).
    pub estimator: Option<Estimator>,

    /// Observation weights, one per point (used by [`Estimator::Weighted`]).
    pub weights: Option<Vec<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LinearBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            estimator: None,
            weights: None,
            duplicate_param: None,
        }
    }

    /// Select the estimator.
    pub fn estimator(mut self, estimator: Estimator) -> Self {
        if self.estimator.is_some() {
            self.duplicate_param = Some("estimator");
        }
        self.estimator = Some(estimator);
        self
    }

    /// Supply observation weights, one per data point.
    ///
    /// Weights are only consulted by [`Estimator::Weighted`]; the other
    /// estimators ignore them.
    pub fn weights(mut self, weights: &[T]) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights.to_vec());
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the linear model.
    pub fn build(self) -> Result<LinearModel<T>, RegressionError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let estimator = self.estimator.unwrap_or_default();

        // The weighted estimator cannot run without weights
        if estimator == Estimator::Weighted && self.weights.is_none() {
            return Err(RegressionError::MissingWeights);
        }

        Ok(LinearModel {
            estimator,
            weights: self.weights,
        })
    }
}

// ============================================================================
// Linear Model
// ============================================================================

/// A validated global linear fit configuration.
#[derive(Debug, Clone)]
pub struct LinearModel<T> {
    estimator: Estimator,
    weights: Option<Vec<T>>,
}

impl<T: Float + WlsSolver> LinearModel<T> {
    /// Fit the configured estimator to the provided data.
    ///
    /// Sorts a copy of the data by x (rejecting duplicate x-values), runs
    /// the estimator, and reports the statistics together with the fitted
    /// line evaluated at the smallest and largest x.
    ///
    /// For [`Estimator::Robust`], only the slope and intercept are robust;
    /// r^2, means, and standard deviations come from an ordinary fit of
    /// the same data.
    pub fn fit(self, x: &[T], y: &[T]) -> Result<LinearResult<T>, RegressionError> {
        Validator::validate_inputs(x, y)?;

        // Sort data by x using sorting module
        let sorted = sort_by_x(x, y);
        check_distinct_x(&sorted.x)?;

        let statistics = match self.estimator {
            Estimator::Simple => slr(&sorted)?,
            Estimator::Weighted => {
                let weights = self.weights.as_ref().ok_or(RegressionError::MissingWeights)?;
                Validator::validate_weights(weights, x.len())?;

                // Weights follow their points through the sort permutation
                let sorted_weights = apply_permutation(weights, &sorted.indices);
                wlr(&sorted, &sorted_weights)?
            }
            Estimator::Robust => rlr(&sorted)?,
        };

        let line = line_endpoints(&sorted.x, &statistics);

        Ok(LinearResult {
            n: sorted.x.len(),
            statistics,
            line,
        })
    }
}

// ============================================================================
// Loess Builder
// ============================================================================

/// Fluent builder for configuring a local (LOESS) regression.
#[derive(Debug, Clone)]
pub struct LoessBuilder<T> {
    /// Fraction of the dataset per window, in [0, 1] (default: 0.67).
    pub fraction: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LoessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fraction: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing fraction.
    ///
    /// Fractions yielding fewer than four window points are clamped up to
    /// the minimum window size at fit time rather than rejected.
    pub fn fraction(mut self, fraction: T) -> Self {
        if self.fraction.is_some() {
            self.duplicate_param = Some("fraction");
        }
        self.fraction = Some(fraction);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the local regression model.
    pub fn build(self) -> Result<LoessModel<T>, RegressionError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let fraction = self
            .fraction
            .unwrap_or_else(|| T::from(0.67).unwrap_or_else(|| T::from(0.5).unwrap()));

        // Validate fraction
        Validator::validate_fraction(fraction)?;

        Ok(LoessModel { fraction })
    }
}

// ============================================================================
// Loess Model
// ============================================================================

/// A validated local regression configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoessModel<T> {
    fraction: T,
}

impl<T: Float + WlsSolver> LoessModel<T> {
    /// Fit a local line around every data point.
    ///
    /// Sorts a copy of the data by x (rejecting duplicate x-values), then
    /// fits one tricube-weighted line per point over a moving window. The
    /// result carries the per-point slope/intercept table plus descriptive
    /// statistics from an ordinary fit of the whole dataset.
    pub fn fit(self, x: &[T], y: &[T]) -> Result<LoessResult<T>, RegressionError> {
        Validator::validate_loess_inputs(x, y)?;

        // Sort data by x using sorting module
        let sorted = sort_by_x(x, y);
        check_distinct_x(&sorted.x)?;

        let executor = LoessExecutor {
            fraction: self.fraction,
        };
        executor.run(&sorted)
    }
}
