//! Points and vectors in 3D space.
//!
//! Both wrap a `glam::DVec3` but stay distinct types: a point is a location,
//! a vector is a displacement. Subtracting two points yields a vector, moving
//! a point by a vector yields a point, and only vectors can be scaled.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::util::math::approx_eq;

/// Displacement in 3D space with no fixed position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector(glam::DVec3);

/// Location in 3D space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point(glam::DVec3);

impl Vector {
    pub const ZERO: Self = Self(glam::DVec3::ZERO);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(glam::DVec3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Unit vector with the same direction.
    ///
    /// A zero vector has no direction; the result then has NaN components.
    pub fn normalize(&self) -> Self {
        Self(self.0 / self.0.length())
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(other.0)
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(other.0))
    }
}

impl Point {
    pub const ORIGIN: Self = Self(glam::DVec3::ZERO);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(glam::DVec3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }
}

fn components_approx_eq(a: glam::DVec3, b: glam::DVec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        components_approx_eq(self.0, other.0)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        components_approx_eq(self.0, other.0)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector(self.0 * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector(self.0 / rhs)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point(self.0 - rhs.0)
    }
}

impl From<glam::DVec3> for Vector {
    fn from(value: glam::DVec3) -> Self {
        Self(value)
    }
}

impl From<Vector> for glam::DVec3 {
    fn from(value: Vector) -> Self {
        value.0
    }
}

impl From<glam::DVec3> for Point {
    fn from(value: glam::DVec3) -> Self {
        Self(value)
    }
}

impl From<Point> for glam::DVec3 {
    fn from(value: Point) -> Self {
        value.0
    }
}
