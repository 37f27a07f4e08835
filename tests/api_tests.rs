//! Tests for the public builder API.
//!
//! These tests exercise the crate exactly as a user would, through the
//! prelude alone:
//! - Builder defaults, setters, and duplicate detection
//! - Estimator selection and weight handling
//! - Input validation surfaced through `fit`
//! - Local regression configuration
//! - Formatted output smoke checks
//!
//! ## Test Organization
//!
//! 1. **Linear Defaults** - Simple fits with no configuration
//! 2. **Estimator Selection** - Weighted and robust paths
//! 3. **Builder Validation** - Missing weights, duplicates
//! 4. **Input Validation** - Errors surfaced through fit
//! 5. **Local Regression** - Defaults, fractions, window limits
//! 6. **Display** - Report smoke checks

use scatterfit::prelude::*;

// ============================================================================
// Linear Default Tests
// ============================================================================

/// Test the default build fits an ordinary least-squares line.
#[test]
fn test_linear_default_fit() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.0, 4.0, 6.0, 8.0];

    let result = Linear::new().build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(result.n, 4);
    assert_eq!(result.statistics.slope, 2.0);
    assert_eq!(result.statistics.intercept, 0.0);
    assert_eq!(result.line[0], PlotPoint { x: 1.0, y: 2.0 });
    assert_eq!(result.line[1], PlotPoint { x: 4.0, y: 8.0 });
}

/// Test unsorted input produces the same fit as sorted input.
#[test]
fn test_linear_unsorted_input() {
    let a = Linear::new()
        .build()
        .unwrap()
        .fit(&[3.0, 1.0, 4.0, 2.0], &[6.0, 2.0, 8.0, 4.0])
        .unwrap();
    let b = Linear::new()
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0])
        .unwrap();

    assert_eq!(a.statistics, b.statistics);
    assert_eq!(a.line, b.line);
}

/// Test weights are ignored unless the weighted estimator is chosen.
#[test]
fn test_linear_weights_ignored_by_default() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.1, 3.8, 6.2, 8.1];

    let plain = Linear::new().build().unwrap().fit(&x, &y).unwrap();
    let with_weights = Linear::new()
        .weights(&[9.0, 1.0, 1.0, 1.0])
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(plain.statistics, with_weights.statistics);
}

// ============================================================================
// Estimator Selection Tests
// ============================================================================

/// Test the robust estimator shrugs off a gross outlier.
#[test]
fn test_robust_ignores_outlier() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi).collect();
    y[9] = 100.0;

    let result = Linear::new()
        .estimator(Robust)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(result.statistics.slope, 2.0);
    assert_eq!(result.statistics.intercept, 0.0);
    assert_eq!(result.line[0], PlotPoint { x: 0.0, y: 0.0 });
    assert_eq!(result.line[1], PlotPoint { x: 9.0, y: 18.0 });
}

/// Test the weighted estimator discounts down-weighted points.
#[test]
fn test_weighted_discounts_points() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.1, 3.8, 6.2, 8.1, 55.0];

    let plain = Linear::new().build().unwrap().fit(&x, &y).unwrap();
    let weighted = Linear::new()
        .estimator(Weighted)
        .weights(&[1.0, 1.0, 1.0, 1.0, 0.0])
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(plain.statistics.slope > 5.0);
    assert!(weighted.statistics.slope < 3.0);
}

/// Test weights follow their points when the input is unsorted.
#[test]
fn test_weighted_unsorted_input() {
    let a = Linear::new()
        .estimator(Weighted)
        .weights(&[1.0, 0.5, 2.0])
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0], &[2.0, 4.1, 5.9])
        .unwrap();
    let b = Linear::new()
        .estimator(Weighted)
        .weights(&[2.0, 1.0, 0.5])
        .build()
        .unwrap()
        .fit(&[3.0, 1.0, 2.0], &[5.9, 2.0, 4.1])
        .unwrap();

    assert_eq!(a.statistics, b.statistics);
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test the weighted estimator requires weights at build time.
#[test]
fn test_weighted_requires_weights() {
    let res = Linear::<f64>::new().estimator(Weighted).build();

    assert!(matches!(res, Err(RegressionError::MissingWeights)));
}

/// Test wrong-length weights are rejected at fit time.
#[test]
fn test_weights_length_checked() {
    let res = Linear::new()
        .estimator(Weighted)
        .weights(&[1.0, 1.0])
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);

    assert!(matches!(
        res,
        Err(RegressionError::MismatchedWeights {
            expected: 3,
            got: 2
        })
    ));
}

/// Test repeated setter calls are rejected.
#[test]
fn test_duplicate_estimator_rejected() {
    let res = Linear::<f64>::new().estimator(Simple).estimator(Robust).build();

    assert!(matches!(
        res,
        Err(RegressionError::DuplicateParameter {
            parameter: "estimator"
        })
    ));
}

/// Test a repeated fraction setter is rejected.
#[test]
fn test_duplicate_fraction_rejected() {
    let res = Loess::<f64>::new().fraction(0.3).fraction(0.5).build();

    assert!(matches!(
        res,
        Err(RegressionError::DuplicateParameter {
            parameter: "fraction"
        })
    ));
}

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test empty input is rejected.
#[test]
fn test_empty_input() {
    let res = Linear::<f64>::new().build().unwrap().fit(&[], &[]);

    assert!(matches!(res, Err(RegressionError::EmptyInput)));
}

/// Test mismatched input lengths are rejected.
#[test]
fn test_mismatched_inputs() {
    let res = Linear::new()
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]);

    assert!(matches!(
        res,
        Err(RegressionError::MismatchedInputs { x_len: 3, y_len: 2 })
    ));
}

/// Test non-finite values are rejected with their location.
#[test]
fn test_non_finite_input() {
    let res = Linear::new()
        .build()
        .unwrap()
        .fit(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]);

    match res {
        Err(RegressionError::InvalidNumericValue(msg)) => {
            assert!(msg.contains("x[1]"));
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

/// Test repeated x values are rejected for line fits.
#[test]
fn test_duplicate_x_rejected() {
    let res = Linear::new()
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]);

    assert!(matches!(res, Err(RegressionError::DuplicateX { value }) if value == 2.0));
}

// ============================================================================
// Local Regression Tests
// ============================================================================

/// Test the default fraction.
#[test]
fn test_loess_default_fraction() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi).collect();

    let result = Loess::new().build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(result.fraction_used, 0.67);
    assert_eq!(result.len(), 10);
}

/// Test out-of-range fractions are rejected at build time.
#[test]
fn test_loess_fraction_bounds() {
    let high = Loess::<f64>::new().fraction(1.5).build();
    let low = Loess::<f64>::new().fraction(-0.1).build();

    assert!(matches!(high, Err(RegressionError::InvalidFraction(v)) if v == 1.5));
    assert!(matches!(low, Err(RegressionError::InvalidFraction(v)) if v == -0.1));
}

/// Test local regression needs enough points for one window.
#[test]
fn test_loess_minimum_points() {
    let res = Loess::new()
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);

    assert!(matches!(
        res,
        Err(RegressionError::InsufficientPoints { got: 3, min: 4 })
    ));
}

/// Test local results come back in ascending x order.
#[test]
fn test_loess_sorts_input() {
    let x = [5.0, 1.0, 4.0, 2.0, 3.0];
    let y = [10.0, 2.0, 8.0, 4.0, 6.0];

    let result = Loess::<f64>::new().fraction(0.8).build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(result.x, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let points = result.points();
    assert_eq!(points.len(), 5);
    for point in &points {
        assert!((point.y - 2.0 * point.x).abs() < 1e-9);
    }
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the linear report mentions the fit and the line.
#[test]
fn test_linear_display_smoke() {
    let result = Linear::new()
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0])
        .unwrap();

    let text = format!("{}", result);

    assert!(text.contains("Slope:"));
    assert!(text.contains("Fitted Line:"));
}

/// Test the local report includes the per-point table.
#[test]
fn test_loess_display_smoke() {
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 1.5 * xi + 2.0).collect();

    let result = Loess::new().build().unwrap().fit(&x, &y).unwrap();

    let text = format!("{}", result);

    assert!(text.contains("Local Fits:"));
    assert!(text.contains("Window span:"));
}
