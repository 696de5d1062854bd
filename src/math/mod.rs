//! Dimension-checked linear algebra.
//!
//! Provides `Vector` (N-dimensional, `f64`) and the small row-major
//! `Matrix` it multiplies against. Both are plain owned buffers, so they
//! can be shared read-only across threads.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
