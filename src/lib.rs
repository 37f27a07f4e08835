//! # Scatterfit — Linear and Local Regression for Scatter Data
//!
//! Bivariate regression for **Rust**: ordinary, weighted, and robust
//! (Theil-Sen) straight-line fits plus LOESS local regression, with the
//! descriptive statistics a scatter-plot front-end needs.
//!
//! ## What does it fit?
//!
//! Given parallel slices of x- and y-values, the crate fits either a single
//! straight line (by least squares, weighted least squares, or the
//! outlier-resistant Theil-Sen median of pairwise slopes) or a LOESS curve
//! (one tricube-weighted line per point over a moving window). Every fit
//! also reports the sample means and standard deviations of the raw data,
//! so results can be rendered directly as a statistics panel.
//!
//! ## Quick Start
//!
//! ### Fitting a Line
//!
//! ```rust
//! use scatterfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0];
//!
//! // Build the model
//! let model = Linear::new().build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 4
//!
//! Statistics:
//!   Slope:        2.000000
//!   Intercept:    0.000000
//!   R²:           1.000000
//!   Mean of x:    2.500000
//!   Mean of y:    5.000000
//!   Std dev of x: 1.290994
//!   Std dev of y: 2.581989
//!
//! Fitted Line:
//!   (1.000000, 2.000000) -> (4.000000, 8.000000)
//! ```
//!
//! ### Robust and Weighted Fits
//!
//! ```rust
//! use scatterfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.1, 3.8, 6.2, 8.1, 55.0]; // last point is an outlier
//!
//! // Theil-Sen shrugs off the outlier
//! let robust = Linear::new().estimator(Robust).build()?.fit(&x, &y)?;
//!
//! // Weighted least squares can exclude it explicitly
//! let weighted = Linear::new()
//!     .estimator(Weighted)
//!     .weights(&[1.0, 1.0, 1.0, 1.0, 0.0])
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! assert!(robust.statistics.slope < 3.0);
//! assert!(weighted.statistics.slope < 3.0);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Local Regression
//!
//! ```rust
//! use scatterfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! let smooth = Loess::new().fraction(0.8).build()?.fit(&x, &y)?;
//!
//! // One local line per point; evaluate each at its own x for the curve
//! let curve = smooth.points();
//! assert_eq!(curve.len(), 5);
//!
//! println!("{}", smooth);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   Fraction:    0.8
//!   Window span: 4
//!
//! Statistics:
//!   Slope:        2.000000
//!   Intercept:    0.000000
//!   R²:           1.000000
//!   Mean of x:    3.000000
//!   Mean of y:    6.000000
//!   Std dev of x: 1.581139
//!   Std dev of y: 3.162278
//!
//! Local Fits:
//!        X        Slope    Intercept      Y_local
//! -----------------------------------------------
//!     1.00     2.000000     0.000000     2.000000
//!     2.00     2.000000     0.000000     4.000000
//!     3.00     2.000000     0.000000     6.000000
//!     4.00     2.000000     0.000000     8.000000
//!     5.00     2.000000     0.000000    10.000000
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` methods return `Result<_, RegressionError>`, and the `?`
//! operator is idiomatic. Errors can also be handled explicitly:
//!
//! ```rust
//! use scatterfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 2.0, 4.0]; // duplicate x
//! let y = vec![2.0, 4.0, 6.0, 8.0];
//!
//! match Linear::new().build()?.fit(&x, &y) {
//!     Ok(result) => println!("slope = {}", result.statistics.slope),
//!     Err(e) => eprintln!("fit failed: {}", e),
//! }
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! scatterfit = { version = "0.1", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Keep datasets small; the robust estimator is quadratic in the number
//!   of points
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"
//! - Sen, P. K. (1968). "Estimates of the Regression Coefficient Based on Kendall's Tau"
//! - NIST/SEMATECH e-Handbook of Statistical Methods, section on LOESS
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, sorting, and window arithmetic.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - core regression algorithms.
mod algorithms;

// Layer 4: Engine - validation, orchestration, and output types.
mod engine;

// High-level fluent API for regression fitting.
mod api;

// Standard regression prelude.
pub mod prelude {
    pub use crate::api::{
        Estimator::{Robust, Simple, Weighted},
        LineFit, LinearBuilder as Linear, LinearResult, LoessBuilder as Loess, LoessResult,
        PlotPoint, RegressionError, SampleStatistics,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
