//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for regression parameters
//! and input data. It checks requirements such as input lengths, finite
//! values, weight-vector shape, and fraction bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like fraction in [0, 1].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Regression Requirements**: At least 2 points for a global fit,
//!   at least one minimum-size window for a local fit.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort data or detect duplicate x-values
//!   (see the sorting primitives).
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::window::Window;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// Provides static methods for validating parameters and input data. All
/// methods return `Result<(), RegressionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays for a global regression.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), RegressionError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(RegressionError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for regression
        if n < 2 {
            return Err(RegressionError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate input arrays for a local regression.
    ///
    /// Same checks as [`Validator::validate_inputs`], plus the minimum-window
    /// requirement: the dataset must be able to fill at least one window of
    /// [`Window::MIN_SPAN`] points.
    pub fn validate_loess_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), RegressionError> {
        Self::validate_inputs(x, y)?;

        let n = x.len();
        if n < Window::MIN_SPAN {
            return Err(RegressionError::InsufficientPoints {
                got: n,
                min: Window::MIN_SPAN,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Weight Validation
    // ========================================================================

    /// Validate a weight vector against the dataset length.
    pub fn validate_weights<T: Float>(weights: &[T], n: usize) -> Result<(), RegressionError> {
        // Check 1: One weight per point
        if weights.len() != n {
            return Err(RegressionError::MismatchedWeights {
                expected: n,
                got: weights.len(),
            });
        }

        // Check 2: Finite and nonnegative
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "weights[{}]={}",
                    i,
                    w.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if w < T::zero() {
                return Err(RegressionError::NegativeWeight { index: i });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the local regression fraction.
    ///
    /// The full closed range [0, 1] is accepted; fractions that would yield
    /// a window smaller than [`Window::MIN_SPAN`] are clamped by the span
    /// calculation rather than rejected here.
    pub fn validate_fraction<T: Float>(fraction: T) -> Result<(), RegressionError> {
        if !fraction.is_finite() || fraction < T::zero() || fraction > T::one() {
            return Err(RegressionError::InvalidFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
