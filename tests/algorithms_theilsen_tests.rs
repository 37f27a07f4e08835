#![cfg(feature = "dev")]
//! Tests for the Theil-Sen robust estimator.
//!
//! These tests verify the median-of-slopes fit:
//! - Binomial pair counting
//! - Median slope and median intercept selection
//! - Odd and even tie-breaking over pairwise slopes
//! - Outlier resistance and the undefined-slope error
//!
//! ## Test Organization
//!
//! 1. **Pair Counting** - Multiplicative binomial coefficients
//! 2. **Known Fits** - Hand-computed slope/intercept medians
//! 3. **Robustness** - Outlier immunity
//! 4. **Errors** - Repeated x-values

use scatterfit::internals::algorithms::theilsen::{binomial, fit_theil_sen};
use scatterfit::internals::primitives::errors::RegressionError;

// ============================================================================
// Pair Counting Tests
// ============================================================================

/// Test binomial coefficients used to size the slope array.
#[test]
fn test_binomial_pairs() {
    assert_eq!(binomial(2, 2), 1);
    assert_eq!(binomial(3, 2), 3);
    assert_eq!(binomial(4, 2), 6);
    assert_eq!(binomial(5, 2), 10);
    assert_eq!(binomial(10, 2), 45);
}

/// Test binomial edge cases.
#[test]
fn test_binomial_edges() {
    assert_eq!(binomial(5, 0), 1);
    assert_eq!(binomial(5, 5), 1);
    assert_eq!(binomial(6, 3), 20);
    assert_eq!(binomial(52, 5), 2_598_960);
}

// ============================================================================
// Known Fit Tests
// ============================================================================

/// Test a perfect line is recovered exactly.
///
/// Every pairwise slope is 2 and every intercept is 0, so the medians
/// are exact.
#[test]
fn test_fit_perfect_line() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = vec![2.0, 4.0, 6.0, 8.0];

    let fit = fit_theil_sen(&x, &y).unwrap();

    assert_eq!(fit.slope, 2.0);
    assert_eq!(fit.intercept, 0.0);
}

/// Test the odd-count slope median on three points.
///
/// Pairwise slopes are [1, 4.5, 8]; the median is 4.5. Intercepts
/// y - 4.5x are [-3.5, -7, -3.5]; the median is -3.5.
#[test]
fn test_fit_three_points_odd_median() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![1.0, 2.0, 10.0];

    let fit = fit_theil_sen(&x, &y).unwrap();

    assert_eq!(fit.slope, 4.5);
    assert_eq!(fit.intercept, -3.5);
}

/// Test the even-count slope median on four points.
///
/// C(4,2) = 6 pairwise slopes [1, 2, 3, 3, 4, 5]; the median averages
/// the 3rd and 4th sorted slopes (0-based indices 2 and 3), giving 3.
/// Intercepts y - 3x are [0, -2, -2, 0]; the even median gives -1.
#[test]
fn test_fit_four_points_even_median() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![0.0, 1.0, 4.0, 9.0];

    let fit = fit_theil_sen(&x, &y).unwrap();

    assert_eq!(fit.slope, 3.0);
    assert_eq!(fit.intercept, -1.0);
}

/// Test the minimal two-point fit.
#[test]
fn test_fit_two_points() {
    let x = vec![0.0, 1.0];
    let y = vec![5.0, 7.0];

    let fit = fit_theil_sen(&x, &y).unwrap();

    assert_eq!(fit.slope, 2.0);
    assert_eq!(fit.intercept, 5.0);
}

// ============================================================================
// Robustness Tests
// ============================================================================

/// Test a single gross outlier does not move the fit.
///
/// Nine of ten points lie on y = 2x; 36 of the 45 pairwise slopes are
/// exactly 2, so the median slope and the median intercept ignore the
/// outlier completely.
#[test]
fn test_fit_ignores_outlier() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi).collect();
    y[9] = 100.0;

    let fit = fit_theil_sen(&x, &y).unwrap();

    assert_eq!(fit.slope, 2.0);
    assert_eq!(fit.intercept, 0.0);
}

/// Test a negative-slope trend with an outlier.
#[test]
fn test_fit_negative_slope() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let mut y: Vec<f64> = x.iter().map(|&xi| 10.0 - 3.0 * xi).collect();
    y[0] = -50.0;

    let fit = fit_theil_sen(&x, &y).unwrap();

    assert_eq!(fit.slope, -3.0);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test a repeated x-value fails with the offending value.
///
/// A zero denominator in any pairwise slope is unrecoverable; the sort
/// layer normally rejects duplicates before this point.
#[test]
fn test_fit_repeated_x_errors() {
    let x = vec![1.0, 1.0, 2.0];
    let y = vec![1.0, 2.0, 3.0];

    let res = fit_theil_sen(&x, &y);

    assert!(
        matches!(res, Err(RegressionError::UndefinedSlope { x }) if x == 1.0),
        "Repeated x should produce an undefined slope error"
    );
}
