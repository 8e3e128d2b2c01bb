//! Ray tracing math kernel.
//!
//! A generic matrix container with determinant, cofactor and inverse, the
//! affine transform builders layered on it, and ray/sphere intersection with
//! hit selection. `canvas` and `demo` sit on top as output and sample scenes.

pub mod canvas;
pub mod colour;
pub mod demo;
pub mod intersection;
pub mod matrix;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod transform;
pub mod tuple;
pub mod util;
