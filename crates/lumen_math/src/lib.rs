//! Lumen math - vector, color, matrix and ray algebra.
//!
//! Vectors come from glam (re-exported below); this crate adds the pieces a
//! ray tracer needs on top of them: reflection/refraction helpers, color
//! utilities, a 4x4 affine `Matrix` with LU-based inversion, and a `Ray`
//! carrying its own valid parameter interval.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod error;
mod interval;
mod matrix;
mod ray;
mod vector;

pub use color::{linear_blend, Color, ColorExt};
pub use error::MathError;
pub use interval::Interval;
pub use matrix::Matrix;
pub use ray::Ray;
pub use vector::VectorExt;
