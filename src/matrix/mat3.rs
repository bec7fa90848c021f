//! 3x3 matrix.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix2x2;
use crate::vector::Vector3;
use crate::{precision, Result, SplineError};

fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Row-major 3x3 matrix with a decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x3 {
    m: [[f64; 3]; 3],
    precision: u32,
}

impl Matrix3x3 {
    /// Creates a matrix from entries in row-major order at the default
    /// precision.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: f64, m01: f64, m02: f64,
        m10: f64, m11: f64, m12: f64,
        m20: f64, m21: f64, m22: f64,
    ) -> Self {
        Self::with_precision(
            m00, m01, m02, m10, m11, m12, m20, m21, m22,
            precision::DEFAULT,
        )
    }

    /// Creates a matrix retaining `digits` decimal digits.
    #[allow(clippy::too_many_arguments)]
    pub fn with_precision(
        m00: f64, m01: f64, m02: f64,
        m10: f64, m11: f64, m12: f64,
        m20: f64, m21: f64, m22: f64,
        digits: u32,
    ) -> Self {
        let entries = [m00, m01, m02, m10, m11, m12, m20, m21, m22];
        precision::assert_finite(&entries, "Matrix3x3::with_precision");
        let r = |value: f64| precision::round(value, digits);
        Self {
            m: [
                [r(m00), r(m01), r(m02)],
                [r(m10), r(m11), r(m12)],
                [r(m20), r(m21), r(m22)],
            ],
            precision: digits,
        }
    }

    fn from_raw(m: [[f64; 3]; 3], digits: u32) -> Self {
        Self::with_precision(
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
            digits,
        )
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Zero matrix.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Builds a matrix whose rows are the given vectors. The precision is
    /// the minimum of the rows' precisions.
    pub fn from_rows(rows: [Vector3; 3]) -> Self {
        let digits = rows
            .iter()
            .map(Vector3::precision)
            .min()
            .unwrap_or(precision::DEFAULT);
        Self::from_raw(
            [rows[0].components(), rows[1].components(), rows[2].components()],
            digits,
        )
    }

    /// Builds a matrix whose columns are the given vectors.
    pub fn from_columns(columns: [Vector3; 3]) -> Self {
        Self::from_rows(columns).transpose()
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
    pub fn to_rows(&self) -> [Vector3; 3] {
        let row = |i: usize| {
            Vector3::with_precision(self.m[i][0], self.m[i][1], self.m[i][2], self.precision)
        };
        [row(0), row(1), row(2)]
    }

    /// Columns as vectors.
    pub fn to_columns(&self) -> [Vector3; 3] {
        let col = |j: usize| {
            Vector3::with_precision(self.m[0][j], self.m[1][j], self.m[2][j], self.precision)
        };
        [col(0), col(1), col(2)]
    }

    /// Returns a copy with `row` replaced. The result takes the minimum of
    /// the two precisions.
    pub fn set_row(&self, index: usize, row: &Vector3) -> Self {
        let digits = self.precision.min(row.precision());
        let mut m = self.m;
        m[index] = row.components();
        Self::from_raw(m, digits)
    }

    /// Returns a copy with `column` replaced.
    pub fn set_column(&self, index: usize, column: &Vector3) -> Self {
        let digits = self.precision.min(column.precision());
        let mut m = self.m;
        let c = column.components();
        for (i, value) in c.iter().enumerate() {
            m[i][index] = *value;
        }
        Self::from_raw(m, digits)
    }

    /// Transposed matrix.
    pub fn transpose(&self) -> Self {
        let m = self.m;
        Self::from_raw(
            [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
            self.precision,
        )
    }

    pub(crate) fn determinant_raw(&self) -> f64 {
        det3(&self.m)
    }

    /// Determinant, rounded to the matrix precision.
    pub fn determinant(&self) -> f64 {
        precision::round(self.determinant_raw(), self.precision)
    }

    /// Minor at (row, col): the 2x2 matrix left after deleting that row
    /// and column.
    pub fn minor(&self, row: usize, col: usize) -> Matrix2x2 {
        let rows: Vec<usize> = (0..3).filter(|&i| i != row).collect();
        let cols: Vec<usize> = (0..3).filter(|&j| j != col).collect();
        Matrix2x2::with_precision(
            self.m[rows[0]][cols[0]],
            self.m[rows[0]][cols[1]],
            self.m[rows[1]][cols[0]],
            self.m[rows[1]][cols[1]],
            self.precision,
        )
    }

    /// M * v (v as a column vector).
    pub fn vector_product_left(&self, v: &Vector3) -> Vector3 {
        let digits = self.precision.min(v.precision());
        let c = v.components();
        let row = |i: usize| self.m[i][0] * c[0] + self.m[i][1] * c[1] + self.m[i][2] * c[2];
        Vector3::with_precision(row(0), row(1), row(2), digits)
    }

    /// v * M (v as a row vector).
    pub fn vector_product_right(&self, v: &Vector3) -> Vector3 {
        let digits = self.precision.min(v.precision());
        let c = v.components();
        let col = |j: usize| c[0] * self.m[0][j] + c[1] * self.m[1][j] + c[2] * self.m[2][j];
        Vector3::with_precision(col(0), col(1), col(2), digits)
    }

    /// Solves M * x = v by Cramer's rule.
    ///
    /// Fails with `SingularMatrix` when the determinant rounds to zero.
    pub fn solve_system(&self, v: &Vector3) -> Result<Vector3> {
        let digits = self.precision.min(v.precision());
        let det = self.determinant_raw();
        precision::check(
            precision::round(det, digits) != 0.0,
            SplineError::SingularMatrix(format!("determinant {} rounds to zero", det)),
        )?;
        let c = v.components();
        let replaced = |col: usize| {
            let mut m = self.m;
            for (i, value) in c.iter().enumerate() {
                m[i][col] = *value;
            }
            det3(&m)
        };
        Ok(Vector3::with_precision(
            replaced(0) / det,
            replaced(1) / det,
            replaced(2) / det,
            digits,
        ))
    }
}
