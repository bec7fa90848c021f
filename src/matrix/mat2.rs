//! 2x2 matrix.

use serde::{Deserialize, Serialize};

use crate::vector::Vector2;
use crate::{precision, Result, SplineError};

/// Row-major 2x2 matrix with a decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    m: [[f64; 2]; 2],
    precision: u32,
}

impl Matrix2x2 {
    /// Creates a matrix from entries in row-major order at the default
    /// precision.
    pub fn new(m00: f64, m01: f64, m10: f64, m11: f64) -> Self {
        Self::with_precision(m00, m01, m10, m11, precision::DEFAULT)
    }

    /// Creates a matrix retaining `digits` decimal digits.
    pub fn with_precision(m00: f64, m01: f64, m10: f64, m11: f64, digits: u32) -> Self {
        precision::assert_finite(&[m00, m01, m10, m11], "Matrix2x2::with_precision");
        Self {
            m: [
                [precision::round(m00, digits), precision::round(m01, digits)],
                [precision::round(m10, digits), precision::round(m11, digits)],
            ],
            precision: digits,
        }
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Zero matrix.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Builds a matrix whose rows are the given vectors. The precision is
    /// the minimum of the rows' precisions.
    pub fn from_rows(rows: [Vector2; 2]) -> Self {
        let digits = rows[0].precision().min(rows[1].precision());
        Self::with_precision(
            rows[0].v0(),
            rows[0].v1(),
            rows[1].v0(),
            rows[1].v1(),
            digits,
        )
    }

    /// Builds a matrix whose columns are the given vectors.
    pub fn from_columns(columns: [Vector2; 2]) -> Self {
        let digits = columns[0].precision().min(columns[1].precision());
        Self::with_precision(
            columns[0].v0(),
            columns[1].v0(),
            columns[0].v1(),
            columns[1].v1(),
            digits,
        )
    }

    /// Entry at (row, col), 0-indexed.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }

    /// Decimal digits retained by this matrix.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Rows as vectors.
    pub fn to_rows(&self) -> [Vector2; 2] {
        [
            Vector2::with_precision(self.m[0][0], self.m[0][1], self.precision),
            Vector2::with_precision(self.m[1][0], self.m[1][1], self.precision),
        ]
    }

    /// Columns as vectors.
    pub fn to_columns(&self) -> [Vector2; 2] {
        [
            Vector2::with_precision(self.m[0][0], self.m[1][0], self.precision),
            Vector2::with_precision(self.m[0][1], self.m[1][1], self.precision),
        ]
    }

    /// Returns a copy with `row` replaced. The result takes the minimum of
    /// the two precisions.
    pub fn set_row(&self, index: usize, row: &Vector2) -> Self {
        let digits = self.precision.min(row.precision());
        let mut m = self.m;
        m[index] = [row.v0(), row.v1()];
        Self::with_precision(m[0][0], m[0][1], m[1][0], m[1][1], digits)
    }

    /// Returns a copy with `column` replaced.
    pub fn set_column(&self, index: usize, column: &Vector2) -> Self {
        let digits = self.precision.min(column.precision());
        let mut m = self.m;
        m[0][index] = column.v0();
        m[1][index] = column.v1();
        Self::with_precision(m[0][0], m[0][1], m[1][0], m[1][1], digits)
    }

    /// Transposed matrix.
    pub fn transpose(&self) -> Self {
        Self::with_precision(
            self.m[0][0],
            self.m[1][0],
            self.m[0][1],
            self.m[1][1],
            self.precision,
        )
    }

    pub(crate) fn determinant_raw(&self) -> f64 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Determinant, rounded to the matrix precision.
    pub fn determinant(&self) -> f64 {
        precision::round(self.determinant_raw(), self.precision)
    }

    /// Minor at (row, col): the entry left after deleting that row and
    /// column. Scalar for a 2x2.
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.m[1 - row][1 - col]
    }

    /// M * v (v as a column vector).
    pub fn vector_product_left(&self, v: &Vector2) -> Vector2 {
        let digits = self.precision.min(v.precision());
        Vector2::with_precision(
            self.m[0][0] * v.v0() + self.m[0][1] * v.v1(),
            self.m[1][0] * v.v0() + self.m[1][1] * v.v1(),
            digits,
        )
    }

    /// v * M (v as a row vector).
    pub fn vector_product_right(&self, v: &Vector2) -> Vector2 {
        let digits = self.precision.min(v.precision());
        Vector2::with_precision(
            v.v0() * self.m[0][0] + v.v1() * self.m[1][0],
            v.v0() * self.m[0][1] + v.v1() * self.m[1][1],
            digits,
        )
    }

    /// Solves M * x = v by Cramer's rule.
    ///
    /// Fails with `SingularMatrix` when the determinant rounds to zero.
    pub fn solve_system(&self, v: &Vector2) -> Result<Vector2> {
        let digits = self.precision.min(v.precision());
        let det = self.determinant_raw();
        precision::check(
            precision::round(det, digits) != 0.0,
            SplineError::SingularMatrix(format!("determinant {} rounds to zero", det)),
        )?;
        let det_x0 = v.v0() * self.m[1][1] - self.m[0][1] * v.v1();
        let det_x1 = self.m[0][0] * v.v1() - v.v0() * self.m[1][0];
        Ok(Vector2::with_precision(det_x0 / det, det_x1 / det, digits))
    }
}
