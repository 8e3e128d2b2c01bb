//! Ray representation.
//!
//! A ray is `r(t) = origin + t * direction`. The direction is not required to
//! be normalized: transforming a ray into object space scales it, and the
//! intersection distances stay valid in world space because of that.

use crate::matrix::{Matrix, MatrixError};
use crate::transform::{transform_point, transform_vector};
use crate::tuple::{Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray.
    pub fn position(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Maps the ray through a 4x4 transform: the origin as a point (w = 1),
    /// the direction as a vector (w = 0).
    pub fn transform(&self, m: &Matrix<f64>) -> Result<Ray, MatrixError> {
        Ok(Ray {
            origin: transform_point(m, self.origin)?,
            direction: transform_vector(m, self.direction)?,
        })
    }
}
