//! 4x4 matrix.
//!
//! The characteristic matrices of every spline family live here: a 4x4
//! applied to a chunk of four control scalars yields the four coefficients
//! of one cubic segment.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix3x3;
use crate::vector::Vector4;
use crate::{precision, Result, SplineError};

fn det4(m: &[[f64; 4]; 4]) -> f64 {
    m[0][0]
        * (m[1][1] * (m[2][2] * m[3][3] - m[2][3] * m[3][2])
            - m[1][2] * (m[2][1] * m[3][3] - m[2][3] * m[3][1])
            + m[1][3] * (m[2][1] * m[3][2] - m[2][2] * m[3][1]))
        - m[0][1]
            * (m[1][0] * (m[2][2] * m[3][3] - m[2][3] * m[3][2])
                - m[1][2] * (m[2][0] * m[3][3] - m[2][3] * m[3][0])
                + m[1][3] * (m[2][0] * m[3][2] - m[2][2] * m[3][0]))
        + m[0][2]
            * (m[1][0] * (m[2][1] * m[3][3] - m[2][3] * m[3][1])
                - m[1][1] * (m[2][0] * m[3][3] - m[2][3] * m[3][0])
                + m[1][3] * (m[2][0] * m[3][1] - m[2][1] * m[3][0]))
        - m[0][3]
            * (m[1][0] * (m[2][1] * m[3][2] - m[2][2] * m[3][1])
                - m[1][1] * (m[2][0] * m[3][2] - m[2][2] * m[3][0])
                + m[1][2] * (m[2][0] * m[3][1] - m[2][1] * m[3][0]))
}

/// Row-major 4x4 matrix with a decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4 {
    m: [[f64; 4]; 4],
    precision: u32,
}

impl Matrix4x4 {
    /// Creates a matrix from entries in row-major order at the default
    /// precision.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: f64, m01: f64, m02: f64, m03: f64,
        m10: f64, m11: f64, m12: f64, m13: f64,
        m20: f64, m21: f64, m22: f64, m23: f64,
        m30: f64, m31: f64, m32: f64, m33: f64,
    ) -> Self {
        Self::from_raw(
            [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
            precision::DEFAULT,
        )
    }

    /// Creates a matrix from row-major entries retaining `digits` decimal
    /// digits.
    pub fn from_raw(m: [[f64; 4]; 4], digits: u32) -> Self {
        for row in &m {
            precision::assert_finite(row, "Matrix4x4::from_raw");
        }
        let mut rounded = [[0.0; 4]; 4];
        for (i, row) in m.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                rounded[i][j] = precision::round(*value, digits);
            }
        }
        Self {
            m: rounded,
            precision: digits,
        }
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::from_raw(
            [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
            precision::DEFAULT,
        )
    }

    /// Zero matrix.
    pub fn zero() -> Self {
        Self::from_raw([[0.0; 4]; 4], precision::DEFAULT)
    }

    /// Builds a matrix whose rows are the given vectors. The precision is
    /// the minimum of the rows' precisions.
    pub fn from_rows(rows: [Vector4; 4]) -> Self {
        let digits = rows
            .iter()
            .map(Vector4::precision)
            .min()
            .unwrap_or(precision::DEFAULT);
        Self::from_raw(
            [
                rows[0].components(),
                rows[1].components(),
                rows[2].components(),
                rows[3].components(),
            ],
            digits,
        )
    }

    /// Builds a matrix whose columns are the given vectors.
    pub fn from_columns(columns: [Vector4; 4]) -> Self {
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
    pub fn to_rows(&self) -> [Vector4; 4] {
        let row = |i: usize| Vector4::from_array_with_precision(self.m[i], self.precision);
        [row(0), row(1), row(2), row(3)]
    }

    /// Columns as vectors.
    pub fn to_columns(&self) -> [Vector4; 4] {
        let col = |j: usize| {
            Vector4::with_precision(
                self.m[0][j],
                self.m[1][j],
                self.m[2][j],
                self.m[3][j],
                self.precision,
            )
        };
        [col(0), col(1), col(2), col(3)]
    }

    /// Returns a copy with `row` replaced. The result takes the minimum of
    /// the two precisions.
    pub fn set_row(&self, index: usize, row: &Vector4) -> Self {
        let digits = self.precision.min(row.precision());
        let mut m = self.m;
        m[index] = row.components();
        Self::from_raw(m, digits)
    }

    /// Returns a copy with `column` replaced.
    pub fn set_column(&self, index: usize, column: &Vector4) -> Self {
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
        let mut t = [[0.0; 4]; 4];
        for (i, row) in self.m.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                t[j][i] = *value;
            }
        }
        Self::from_raw(t, self.precision)
    }

    pub(crate) fn determinant_raw(&self) -> f64 {
        det4(&self.m)
    }

    /// Determinant, rounded to the matrix precision.
    pub fn determinant(&self) -> f64 {
        precision::round(self.determinant_raw(), self.precision)
    }

    /// Minor at (row, col): the 3x3 matrix left after deleting that row
    /// and column.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3x3 {
        let rows: Vec<usize> = (0..4).filter(|&i| i != row).collect();
        let cols: Vec<usize> = (0..4).filter(|&j| j != col).collect();
        let e = |i: usize, j: usize| self.m[rows[i]][cols[j]];
        Matrix3x3::with_precision(
            e(0, 0), e(0, 1), e(0, 2),
            e(1, 0), e(1, 1), e(1, 2),
            e(2, 0), e(2, 1), e(2, 2),
            self.precision,
        )
    }

    /// M * v (v as a column vector).
    pub fn vector_product_left(&self, v: &Vector4) -> Vector4 {
        let digits = self.precision.min(v.precision());
        let c = v.components();
        let row = |i: usize| {
            self.m[i][0] * c[0] + self.m[i][1] * c[1] + self.m[i][2] * c[2] + self.m[i][3] * c[3]
        };
        Vector4::with_precision(row(0), row(1), row(2), row(3), digits)
    }

    /// v * M (v as a row vector).
    pub fn vector_product_right(&self, v: &Vector4) -> Vector4 {
        let digits = self.precision.min(v.precision());
        let c = v.components();
        let col = |j: usize| {
            c[0] * self.m[0][j] + c[1] * self.m[1][j] + c[2] * self.m[2][j] + c[3] * self.m[3][j]
        };
        Vector4::with_precision(col(0), col(1), col(2), col(3), digits)
    }

    /// Solves M * x = v by Cramer's rule.
    ///
    /// Fails with `SingularMatrix` when the determinant rounds to zero.
    pub fn solve_system(&self, v: &Vector4) -> Result<Vector4> {
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
            det4(&m)
        };
        Ok(Vector4::with_precision(
            replaced(0) / det,
            replaced(1) / det,
            replaced(2) / det,
            replaced(3) / det,
            digits,
        ))
    }
}
