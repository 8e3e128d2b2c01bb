//! Generic row-major matrix container.
//!
//! `Matrix<T>` stores `rows * cols` elements in a flat buffer, row by row.
//! Every operation returns a fresh container; shape problems come back as
//! [`MatrixError`] while a singular matrix is reported by [`Matrix::inverse`]
//! as `Ok(None)`.

use std::fmt;
use std::ops::{Index, IndexMut, Neg};

use num_traits::{Float, Num, NumCast, ToPrimitive};

use crate::tuple::{Point, Vector};
use crate::util::math::{approx_eq, EPSILON};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("data length {actual} does not match a {rows}x{cols} matrix")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        actual: usize,
    },
    #[error("cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("{rows}x{cols} matrix is not square")]
    NotSquare { rows: usize, cols: usize },
    #[error("{side}x{side} matrix is too small, at least 2x2 is required")]
    TooSmall { side: usize },
    #[error("({row}, {col}) lies outside a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Numeric element of a [`Matrix`].
///
/// `approx_eq` is what container equality is built on: integers compare
/// exactly, floats within [`EPSILON`].
pub trait Element: Num + Copy + Neg<Output = Self> + fmt::Debug {
    fn approx_eq(self, other: Self) -> bool;
}

macro_rules! exact_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

exact_element!(i8, i16, i32, i64, i128, isize);

impl Element for f32 {
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < EPSILON as f32
    }
}

impl Element for f64 {
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        approx_eq(self, other)
    }
}

#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Builds a matrix from row-major data; the length must be `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: impl Into<Vec<T>>) -> Result<Self, MatrixError> {
        let data = data.into();
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::SizeMismatch {
                rows,
                cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    pub fn identity(side: usize) -> Self {
        let mut result = Self::zeros(side, side);
        for i in 0..side {
            result[(i, i)] = T::one();
        }
        result
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Converts every element to another numeric type, `None` if one does not fit.
    pub fn cast<U>(&self) -> Option<Matrix<U>>
    where
        T: ToPrimitive,
        U: Element + NumCast,
    {
        let data = self
            .data
            .iter()
            .map(|&v| <U as NumCast>::from(v))
            .collect::<Option<Vec<U>>>()?;
        Some(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// `self * other`; `self.cols` must equal `other.rows`.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                result[(i, j)] = (0..self.cols)
                    .fold(T::zero(), |acc, k| acc + self[(i, k)] * other[(k, j)]);
            }
        }
        Ok(result)
    }

    pub fn transpose(&self) -> Matrix<T> {
        let mut result = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows < 2 {
            return Err(MatrixError::TooSmall { side: self.rows });
        }
        if self.rows == 2 {
            let d = &self.data;
            return Ok(d[0] * d[3] - d[1] * d[2]);
        }

        (0..self.cols).try_fold(T::zero(), |acc, col| {
            Ok::<T, MatrixError>(acc + self[(0, col)] * self.cofactor(0, col)?)
        })
    }

    /// Copy of the matrix without `row` and `col`.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix<T>, MatrixError> {
        self.check_bounds(row, col)?;

        let data = self
            .data
            .chunks(self.cols)
            .enumerate()
            .filter(|&(r, _)| r != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(|&(c, _)| c != col)
                    .map(|(_, &v)| v)
            })
            .collect();

        Ok(Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        })
    }

    /// Determinant of the submatrix without `row` and `col`. For a 2x2 matrix the
    /// submatrix is a single element, which is its own minor.
    pub fn minor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let sub = self.submatrix(row, col)?;
        if sub.rows == 1 && sub.cols == 1 {
            return Ok(sub.data[0]);
        }
        sub.determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl<T: Element + Float> Matrix<T> {
    /// Inverse through the adjugate: transposed cofactor matrix divided by the determinant.
    ///
    /// Returns `Ok(None)` when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Option<Matrix<T>>, MatrixError> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Ok(None);
        }

        let mut cofactors = Matrix::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                cofactors[(row, col)] = self.cofactor(row, col)?;
            }
        }

        Ok(Some(cofactors.transpose().map(|v| v / det)))
    }

    pub fn is_invertible(&self) -> Result<bool, MatrixError> {
        Ok(self.determinant()? != T::zero())
    }
}

impl Matrix<f64> {
    /// Converts a 4x4 container into glam's column-major `DMat4`.
    pub fn to_dmat4(&self) -> Result<glam::DMat4, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let cols_array: [f64; 16] =
            self.transpose()
                .data
                .try_into()
                .map_err(|data: Vec<f64>| MatrixError::SizeMismatch {
                    rows: 4,
                    cols: 4,
                    actual: data.len(),
                })?;
        Ok(glam::DMat4::from_cols_array(&cols_array))
    }
}

impl From<glam::DMat4> for Matrix<f64> {
    fn from(value: glam::DMat4) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: value.transpose().to_cols_array().to_vec(),
        }
    }
}

/// Homogeneous column for a point (w = 1).
impl From<Point> for Matrix<f64> {
    fn from(p: Point) -> Self {
        Self {
            rows: 4,
            cols: 1,
            data: vec![p.x(), p.y(), p.z(), 1.0],
        }
    }
}

/// Homogeneous column for a vector (w = 0).
impl From<Vector> for Matrix<f64> {
    fn from(v: Vector) -> Self {
        Self {
            rows: 4,
            cols: 1,
            data: vec![v.x(), v.y(), v.z(), 0.0],
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.approx_eq(b))
    }
}
