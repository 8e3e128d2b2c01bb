//! Affine transform builders.
//!
//! Each builder starts from the 4x4 identity and overwrites a few entries.
//! Transforms compose by matrix multiplication and apply right to left: in
//! `c * b * a` the matrix `a` acts on a point first.

use num_traits::Float;

use crate::matrix::{Element, Matrix, MatrixError};
use crate::tuple::{Point, Vector};

pub fn translation<T: Element>(x: T, y: T, z: T) -> Matrix<T> {
    let mut m = Matrix::identity(4);
    m[(0, 3)] = x;
    m[(1, 3)] = y;
    m[(2, 3)] = z;
    m
}

pub fn scale<T: Element>(x: T, y: T, z: T) -> Matrix<T> {
    let mut m = Matrix::identity(4);
    m[(0, 0)] = x;
    m[(1, 1)] = y;
    m[(2, 2)] = z;
    m
}

pub fn rotation_x<T: Element + Float>(radians: T) -> Matrix<T> {
    let (sin, cos) = radians.sin_cos();
    let mut m = Matrix::identity(4);
    m[(1, 1)] = cos;
    m[(1, 2)] = -sin;
    m[(2, 1)] = sin;
    m[(2, 2)] = cos;
    m
}

pub fn rotation_y<T: Element + Float>(radians: T) -> Matrix<T> {
    let (sin, cos) = radians.sin_cos();
    let mut m = Matrix::identity(4);
    m[(0, 0)] = cos;
    m[(0, 2)] = sin;
    m[(2, 0)] = -sin;
    m[(2, 2)] = cos;
    m
}

pub fn rotation_z<T: Element + Float>(radians: T) -> Matrix<T> {
    let (sin, cos) = radians.sin_cos();
    let mut m = Matrix::identity(4);
    m[(0, 0)] = cos;
    m[(0, 1)] = -sin;
    m[(1, 0)] = sin;
    m[(1, 1)] = cos;
    m
}

/// Shear moving each coordinate in proportion to the other two,
/// e.g. `xy` moves x in proportion to y.
pub fn shearing<T: Element>(xy: T, xz: T, yx: T, yz: T, zx: T, zy: T) -> Matrix<T> {
    let mut m = Matrix::identity(4);
    m[(0, 1)] = xy;
    m[(0, 2)] = xz;
    m[(1, 0)] = yx;
    m[(1, 2)] = yz;
    m[(2, 0)] = zx;
    m[(2, 1)] = zy;
    m
}

/// Applies a 4x4 transform to a point through its homogeneous column (w = 1).
pub fn transform_point(m: &Matrix<f64>, p: Point) -> Result<Point, MatrixError> {
    let column = m.multiply(&Matrix::from(p))?;
    Ok(Point::new(column[(0, 0)], column[(1, 0)], column[(2, 0)]))
}

/// Applies a 4x4 transform to a vector through its homogeneous column (w = 0),
/// so translation leaves it untouched.
pub fn transform_vector(m: &Matrix<f64>, v: Vector) -> Result<Vector, MatrixError> {
    let column = m.multiply(&Matrix::from(v))?;
    Ok(Vector::new(column[(0, 0)], column[(1, 0)], column[(2, 0)]))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

    use super::*;

    #[test]
    fn translating_a_point() {
        let transform = translation(5.0, -3.0, 2.0);
        let p = Point::new(-3.0, 4.0, 5.0);
        assert_eq!(transform_point(&transform, p).unwrap(), Point::new(2.0, 1.0, 7.0));

        let inv = transform.inverse().unwrap().unwrap();
        assert_eq!(transform_point(&inv, p).unwrap(), Point::new(-8.0, 7.0, 3.0));
    }

    #[test]
    fn translation_does_not_affect_vectors() {
        let transform = translation(5.0, -3.0, 2.0);
        let v = Vector::new(-3.0, 4.0, 5.0);
        assert_eq!(transform_vector(&transform, v).unwrap(), v);
    }

    #[test]
    fn integer_translation_stays_exact() {
        let transform = translation(5, -3, 2);
        let p = Matrix::new(4, 1, vec![-3, 4, 5, 1]).unwrap();
        assert_eq!(
            transform.multiply(&p).unwrap(),
            Matrix::new(4, 1, vec![2, 1, 7, 1]).unwrap()
        );
    }

    #[test]
    fn scaling_points_and_vectors() {
        let transform = scale(2.0, 3.0, 4.0);
        assert_eq!(
            transform_point(&transform, Point::new(-4.0, 6.0, 8.0)).unwrap(),
            Point::new(-8.0, 18.0, 32.0)
        );
        assert_eq!(
            transform_vector(&transform, Vector::new(-4.0, 6.0, 8.0)).unwrap(),
            Vector::new(-8.0, 18.0, 32.0)
        );

        let inv = transform.inverse().unwrap().unwrap();
        assert_eq!(
            transform_vector(&inv, Vector::new(-4.0, 6.0, 8.0)).unwrap(),
            Vector::new(-2.0, 2.0, 2.0)
        );
    }

    #[test]
    fn reflection_is_scaling_by_a_negative_value() {
        let transform = scale(-1.0, 1.0, 1.0);
        assert_eq!(
            transform_point(&transform, Point::new(2.0, 3.0, 4.0)).unwrap(),
            Point::new(-2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn rotating_around_the_x_axis() {
        let p = Point::new(0.0, 1.0, 0.0);
        let half_quarter = rotation_x(FRAC_PI_4);
        let full_quarter = rotation_x(FRAC_PI_2);
        assert_eq!(
            transform_point(&half_quarter, p).unwrap(),
            Point::new(0.0, SQRT_2 / 2.0, SQRT_2 / 2.0)
        );
        assert_eq!(transform_point(&full_quarter, p).unwrap(), Point::new(0.0, 0.0, 1.0));

        let inv = half_quarter.inverse().unwrap().unwrap();
        assert_eq!(
            transform_point(&inv, p).unwrap(),
            Point::new(0.0, SQRT_2 / 2.0, -SQRT_2 / 2.0)
        );
    }

    #[test]
    fn rotating_around_the_y_axis() {
        let p = Point::new(0.0, 0.0, 1.0);
        assert_eq!(
            transform_point(&rotation_y(FRAC_PI_4), p).unwrap(),
            Point::new(SQRT_2 / 2.0, 0.0, SQRT_2 / 2.0)
        );
        assert_eq!(
            transform_point(&rotation_y(FRAC_PI_2), p).unwrap(),
            Point::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn rotating_around_the_z_axis() {
        let p = Point::new(0.0, 1.0, 0.0);
        assert_eq!(
            transform_point(&rotation_z(FRAC_PI_4), p).unwrap(),
            Point::new(-SQRT_2 / 2.0, SQRT_2 / 2.0, 0.0)
        );
        assert_eq!(
            transform_point(&rotation_z(FRAC_PI_2), p).unwrap(),
            Point::new(-1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn shearing_moves_each_axis_in_proportion_to_the_others() {
        let p = Point::new(2.0, 3.0, 4.0);
        let cases = [
            (shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0), Point::new(5.0, 3.0, 4.0)),
            (shearing(0.0, 1.0, 0.0, 0.0, 0.0, 0.0), Point::new(6.0, 3.0, 4.0)),
            (shearing(0.0, 0.0, 1.0, 0.0, 0.0, 0.0), Point::new(2.0, 5.0, 4.0)),
            (shearing(0.0, 0.0, 0.0, 1.0, 0.0, 0.0), Point::new(2.0, 7.0, 4.0)),
            (shearing(0.0, 0.0, 0.0, 0.0, 1.0, 0.0), Point::new(2.0, 3.0, 6.0)),
            (shearing(0.0, 0.0, 0.0, 0.0, 0.0, 1.0), Point::new(2.0, 3.0, 7.0)),
        ];
        for (transform, expected) in cases {
            assert_eq!(transform_point(&transform, p).unwrap(), expected);
        }
    }

    #[test]
    fn chained_transforms_apply_in_reverse_order() {
        let p = Point::new(1.0, 0.0, 1.0);
        let a = rotation_x(FRAC_PI_2);
        let b = scale(5.0, 5.0, 5.0);
        let c = translation(10.0, 5.0, 7.0);

        let p2 = transform_point(&a, p).unwrap();
        assert_eq!(p2, Point::new(1.0, -1.0, 0.0));
        let p3 = transform_point(&b, p2).unwrap();
        assert_eq!(p3, Point::new(5.0, -5.0, 0.0));
        let p4 = transform_point(&c, p3).unwrap();
        assert_eq!(p4, Point::new(15.0, 0.0, 7.0));

        let chained = c.multiply(&b).unwrap().multiply(&a).unwrap();
        assert_eq!(transform_point(&chained, p).unwrap(), p4);
    }

    #[test]
    fn builders_match_glam() {
        let ours = translation(1.0, 2.0, 3.0)
            .multiply(&rotation_y(0.3))
            .unwrap()
            .multiply(&scale(2.0, 0.5, 4.0))
            .unwrap();
        let theirs = glam::DMat4::from_translation(glam::DVec3::new(1.0, 2.0, 3.0))
            * glam::DMat4::from_rotation_y(0.3)
            * glam::DMat4::from_scale(glam::DVec3::new(2.0, 0.5, 4.0));
        assert_eq!(ours, Matrix::from(theirs));
    }
}
