//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fitting by coordinating between primitives
//! (errors, sorting, windows) and algorithms (WLS, moments, Theil-Sen).
//! It provides input validation, the estimator entry points, the local
//! regression loop, and the result structures.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration for global and local regression.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for regression operations.
pub mod output;
