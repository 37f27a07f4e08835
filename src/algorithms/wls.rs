//! Weighted least-squares core.
//!
//! ## Purpose
//!
//! This module accumulates the weighted sums of a dataset or window and
//! solves the 1D weighted least-squares normal equations for a slope and
//! intercept. It is the single fitting primitive shared by the global
//! estimators and the local regression engine.
//!
//! ## Design notes
//!
//! * **Direct form**: The solver works on the raw sums through the
//!   determinant D = sum_w * sum_wxx - sum_wx^2 rather than a centered
//!   formulation, so its failure mode is a single determinant check.
//! * **Specialization**: Accumulation is generic over `Float` with SIMD
//!   overrides for `f32` and `f64` via the [`WlsSolver`] trait.
//! * **Propagation**: A non-finite determinant (possible only from
//!   non-finite inputs or weights) is not intercepted; NaN flows through
//!   into the coefficients. Only a zero or near-zero determinant is an
//!   error.
//!
//! ## Key concepts
//!
//! * **WlsSums**: The five weighted sums sum_w, sum_wx, sum_wy, sum_wxx,
//!   sum_wxy that fully determine the fitted line.
//! * **Degeneracy**: D vanishes exactly when the weighted x-values carry no
//!   spread (a single effective x after weighting), in which case no unique
//!   line exists.
//!
//! ## Invariants
//!
//! * Accumulation order is deterministic for a given input length and type.
//! * `solve_wls` never divides by a determinant failing the near-zero check.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (lengths, finiteness, weight signs).
//! * This module does not compute means, deviations, or r-squared.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x4};

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Accumulated Sums
// ============================================================================

/// Weighted sums accumulated over a dataset or window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WlsSums<T> {
    /// Sum of weights.
    pub w: T,

    /// Sum of w * x.
    pub wx: T,

    /// Sum of w * y.
    pub wy: T,

    /// Sum of w * x^2.
    pub wxx: T,

    /// Sum of w * x * y.
    pub wxy: T,
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation for 1D weighted least squares (generic Float).
#[inline]
pub fn accumulate_wls_scalar<T: Float>(x: &[T], y: &[T], weights: &[T]) -> WlsSums<T> {
    let n = x.len();

    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxx = T::zero();
    let mut sum_wxy = T::zero();

    for i in 0..n {
        let w = weights[i];
        let x_val = x[i];
        let y_val = y[i];

        let wx = w * x_val;

        sum_w = sum_w + w;
        sum_wx = sum_wx + wx;
        sum_wy = sum_wy + w * y_val;
        sum_wxx = sum_wxx + wx * x_val;
        sum_wxy = sum_wxy + wx * y_val;
    }

    WlsSums {
        w: sum_w,
        wx: sum_wx,
        wy: sum_wy,
        wxx: sum_wxx,
        wxy: sum_wxy,
    }
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation for 1D weighted least squares (f64).
#[inline]
pub fn accumulate_wls_simd_f64(x: &[f64], y: &[f64], weights: &[f64]) -> WlsSums<f64> {
    let mut s_w = f64x4::splat(0.0);
    let mut s_wx = f64x4::splat(0.0);
    let mut s_wy = f64x4::splat(0.0);
    let mut s_wxx = f64x4::splat(0.0);
    let mut s_wxy = f64x4::splat(0.0);

    let mut x_chunks = x.chunks_exact(4);
    let mut y_chunks = y.chunks_exact(4);
    let mut w_chunks = weights.chunks_exact(4);

    for ((xs, ys), ws) in (&mut x_chunks).zip(&mut y_chunks).zip(&mut w_chunks) {
        let x_val = f64x4::new([xs[0], xs[1], xs[2], xs[3]]);
        let y_val = f64x4::new([ys[0], ys[1], ys[2], ys[3]]);
        let w = f64x4::new([ws[0], ws[1], ws[2], ws[3]]);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxx += wx * x_val;
        s_wxy += wx * y_val;
    }

    let mut a_w = s_w.reduce_add();
    let mut a_wx = s_wx.reduce_add();
    let mut a_wy = s_wy.reduce_add();
    let mut a_wxx = s_wxx.reduce_add();
    let mut a_wxy = s_wxy.reduce_add();

    let x_rest = x_chunks.remainder();
    let y_rest = y_chunks.remainder();
    let w_rest = w_chunks.remainder();

    for i in 0..x_rest.len() {
        let w = w_rest[i];
        let x_val = x_rest[i];
        let y_val = y_rest[i];

        let wx = w * x_val;

        a_w += w;
        a_wx += wx;
        a_wy += w * y_val;
        a_wxx += wx * x_val;
        a_wxy += wx * y_val;
    }

    WlsSums {
        w: a_w,
        wx: a_wx,
        wy: a_wy,
        wxx: a_wxx,
        wxy: a_wxy,
    }
}

/// SIMD-optimized accumulation for 1D weighted least squares (f32).
#[inline]
pub fn accumulate_wls_simd_f32(x: &[f32], y: &[f32], weights: &[f32]) -> WlsSums<f32> {
    let mut s_w = f32x8::splat(0.0);
    let mut s_wx = f32x8::splat(0.0);
    let mut s_wy = f32x8::splat(0.0);
    let mut s_wxx = f32x8::splat(0.0);
    let mut s_wxy = f32x8::splat(0.0);

    let mut x_chunks = x.chunks_exact(8);
    let mut y_chunks = y.chunks_exact(8);
    let mut w_chunks = weights.chunks_exact(8);

    for ((xs, ys), ws) in (&mut x_chunks).zip(&mut y_chunks).zip(&mut w_chunks) {
        let x_val = f32x8::new([xs[0], xs[1], xs[2], xs[3], xs[4], xs[5], xs[6], xs[7]]);
        let y_val = f32x8::new([ys[0], ys[1], ys[2], ys[3], ys[4], ys[5], ys[6], ys[7]]);
        let w = f32x8::new([ws[0], ws[1], ws[2], ws[3], ws[4], ws[5], ws[6], ws[7]]);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxx += wx * x_val;
        s_wxy += wx * y_val;
    }

    let mut a_w = s_w.reduce_add();
    let mut a_wx = s_wx.reduce_add();
    let mut a_wy = s_wy.reduce_add();
    let mut a_wxx = s_wxx.reduce_add();
    let mut a_wxy = s_wxy.reduce_add();

    let x_rest = x_chunks.remainder();
    let y_rest = y_chunks.remainder();
    let w_rest = w_chunks.remainder();

    for i in 0..x_rest.len() {
        let w = w_rest[i];
        let x_val = x_rest[i];
        let y_val = y_rest[i];

        let wx = w * x_val;

        a_w += w;
        a_wx += wx;
        a_wy += w * y_val;
        a_wxx += wx * x_val;
        a_wxy += wx * y_val;
    }

    WlsSums {
        w: a_w,
        wx: a_wx,
        wy: a_wy,
        wxx: a_wxx,
        wxy: a_wxy,
    }
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific weighted least squares accumulation.
pub trait WlsSolver: Float {
    /// Accumulate weighted sums over a dataset or window.
    #[inline]
    fn accumulate_wls(x: &[Self], y: &[Self], weights: &[Self]) -> WlsSums<Self> {
        accumulate_wls_scalar(x, y, weights)
    }
}

impl WlsSolver for f64 {
    #[inline]
    fn accumulate_wls(x: &[f64], y: &[f64], weights: &[f64]) -> WlsSums<f64> {
        accumulate_wls_simd_f64(x, y, weights)
    }
}

impl WlsSolver for f32 {
    #[inline]
    fn accumulate_wls(x: &[f32], y: &[f32], weights: &[f32]) -> WlsSums<f32> {
        accumulate_wls_simd_f32(x, y, weights)
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Solve the 1D weighted least-squares normal equations.
///
/// Works on the raw sums through the determinant
/// `D = sum_w * sum_wxx - sum_wx^2`:
///
/// * intercept = (sum_wxx * sum_wy - sum_wx * sum_wxy) / D
/// * slope     = (sum_w * sum_wxy - sum_wx * sum_wy) / D
///
/// Fails with [`RegressionError::DegenerateFit`] when D is zero or within
/// machine epsilon of zero relative to the magnitude of `sum_w * sum_wxx`.
/// A NaN determinant fails the near-zero comparison and propagates into the
/// coefficients instead of erroring.
#[inline]
pub fn solve_wls<T: Float>(sums: &WlsSums<T>) -> Result<LineFit<T>, RegressionError> {
    let det = sums.w * sums.wxx - sums.wx * sums.wx;
    let scale = (sums.w * sums.wxx).abs();

    if det.abs() <= T::epsilon() * scale {
        return Err(RegressionError::DegenerateFit);
    }

    let intercept = (sums.wxx * sums.wy - sums.wx * sums.wxy) / det;
    let slope = (sums.w * sums.wxy - sums.wx * sums.wy) / det;

    Ok(LineFit { slope, intercept })
}

// ============================================================================
// LineFit
// ============================================================================

/// A fitted line in slope-intercept form, y = slope * x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Slope (beta).
    pub slope: T,

    /// Intercept (alpha).
    pub intercept: T,
}

impl<T: Float> LineFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}
