//! ndcollide: N-dimensional vectors and collision shapes.
//!
//! This crate provides a dimension-checked `Vector` (with a small `Matrix`
//! to multiply against), a closed family of collision shapes (point,
//! ellipse, box) that answer containment and intersection queries, and the
//! seams those shapes need: time-varying particles, a drawing surface and
//! a serde-backed shape factory.
//!
//! Vector arithmetic fails loudly on mismatched dimensions; geometric
//! queries never fail and report "not contained" instead.
pub mod config;
pub mod error;
pub mod kinematics;
pub mod math;
pub mod render;
pub mod shapes;

pub use error::{MatrixIndexError, ShapeError, VectorError};
pub use math::{Matrix, Vector};
pub use shapes::{BoxShape, Ellipse, Extent, Point, Shape, ShapeKind};
