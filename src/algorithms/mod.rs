//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core fitting algorithms: weighted least-squares
//! accumulation and solving, unweighted sample moments, and the Theil-Sen
//! robust estimator. It depends on the math and primitives layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted least-squares accumulation and solving.
pub mod wls;

/// Unweighted sample moments.
pub mod moments;

/// Theil-Sen robust line estimation.
pub mod theilsen;
