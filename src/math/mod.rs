//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions with no knowledge of
//! datasets, validation, or execution flow. It depends only on the
//! primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tricube kernel weighting.
pub mod kernel;

/// Median computation.
pub mod median;
