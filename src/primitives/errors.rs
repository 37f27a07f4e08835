//! Error types for regression operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while fitting a
//! regression, including input validation, weight-vector constraints, and
//! numerical degeneracies in the solvers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misconfiguration is caught and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Weight validation**: Missing, mismatched, or negative weight vectors.
//! 3. **Ordering constraints**: Duplicate x-values invalidate sort-dependent algorithms.
//! 4. **Numerical degeneracies**: Singular normal equations, zero pairwise denominators.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors are reported as `f64` regardless of the fit precision.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Input arrays are empty; regression requires at least 2 points.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Number of points is below the minimum requirement for the selected estimator.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// The weighted estimator was selected but no weight vector was supplied.
    MissingWeights,

    /// Weight vector length must equal the number of data points.
    MismatchedWeights {
        /// Number of data points.
        expected: usize,
        /// Number of weights provided.
        got: usize,
    },

    /// Weights must be nonnegative.
    NegativeWeight {
        /// Index of the first negative weight.
        index: usize,
    },

    /// Two points share an x-value; ordering-dependent algorithms cannot proceed.
    DuplicateX {
        /// The repeated x-value.
        value: f64,
    },

    /// The normal equations are singular (zero or near-zero determinant).
    DegenerateFit,

    /// LOESS fraction must be in the range [0, 1].
    InvalidFraction(f64),

    /// LOESS requires enough points to form at least one minimum-size window.
    InsufficientPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// A pairwise slope has a zero denominator (two points with equal x).
    UndefinedSlope {
        /// The x-value shared by the pair.
        x: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::MissingWeights => {
                write!(f, "No weight vector supplied for the weighted estimator")
            }
            Self::MismatchedWeights { expected, got } => {
                write!(
                    f,
                    "Weight mismatch: {got} weights for {expected} points (each x-y pair needs one weight)"
                )
            }
            Self::NegativeWeight { index } => {
                write!(f, "Negative weight at index {index} (weights must be >= 0)")
            }
            Self::DuplicateX { value } => {
                write!(f, "Duplicate x-value: {value} appears more than once")
            }
            Self::DegenerateFit => {
                write!(
                    f,
                    "Degenerate fit: the normal equations are singular (no unique line exists)"
                )
            }
            Self::InvalidFraction(frac) => {
                write!(f, "Invalid fraction: {frac} (must be >= 0 and <= 1)")
            }
            Self::InsufficientPoints { got, min } => {
                write!(
                    f,
                    "Insufficient points for local regression: got {got}, need at least {min}"
                )
            }
            Self::UndefinedSlope { x } => {
                write!(f, "Undefined pairwise slope: two points share x = {x}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegressionError {}
