//! Spline families and the control-to-coefficient factory.
//!
//! Each family is defined by a constant 4x4 characteristic matrix M and a
//! chunking stride: a window of four control scalars maps to the four
//! coefficients of one cubic segment via `[c0 c1 c2 c3] = M * [p0 p1 p2
//! p3]`. The stride is how far the window advances between segments: 3
//! for Bezier (shared endpoint), 2 for Hermite (point/tangent pairs), 1
//! for the interpolating and approximating families.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix4x4;
use crate::polynomial::Cubic;
use crate::vector::Vector4;
use crate::{precision, Result, SplineError};

/// The supported cubic spline families.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SplineFamily {
    /// Endpoint-interpolating with free interior handles.
    Bezier,
    /// Alternating position and tangent controls.
    Hermite,
    /// Interpolating with tangents scaled by a tension parameter.
    Cardinal {
        /// Tangent scale; 0.5 reproduces Catmull-Rom.
        tension: f64,
    },
    /// Cardinal with tension 0.5.
    CatmullRom,
    /// Approximating B-spline (does not pass through its controls).
    Basis,
}

impl SplineFamily {
    /// The constant 4x4 mapping a control chunk to cubic coefficients, at
    /// the default precision.
    pub fn characteristic_matrix(&self) -> Matrix4x4 {
        self.characteristic_matrix_with_precision(precision::DEFAULT)
    }

    /// The characteristic matrix retaining `digits` decimal digits.
    pub fn characteristic_matrix_with_precision(&self, digits: u32) -> Matrix4x4 {
        let rows = match *self {
            SplineFamily::Bezier => [
                [1.0, 0.0, 0.0, 0.0],
                [-3.0, 3.0, 0.0, 0.0],
                [3.0, -6.0, 3.0, 0.0],
                [-1.0, 3.0, -3.0, 1.0],
            ],
            SplineFamily::Hermite => [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [-3.0, -2.0, 3.0, -1.0],
                [2.0, 1.0, -2.0, 1.0],
            ],
            SplineFamily::Cardinal { tension: a } => [
                [0.0, 1.0, 0.0, 0.0],
                [-a, 0.0, a, 0.0],
                [2.0 * a, a - 3.0, 3.0 - 2.0 * a, -a],
                [-a, 2.0 - a, a - 2.0, a],
            ],
            SplineFamily::CatmullRom => {
                return SplineFamily::Cardinal { tension: 0.5 }
                    .characteristic_matrix_with_precision(digits)
            }
            SplineFamily::Basis => [
                [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0],
                [-3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0],
                [3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0],
                [-1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0],
            ],
        };
        Matrix4x4::from_raw(rows, digits)
    }

    /// How far the four-wide control window advances between segments.
    pub const fn stride(&self) -> usize {
        match self {
            SplineFamily::Bezier => 3,
            SplineFamily::Hermite => 2,
            SplineFamily::Cardinal { .. } | SplineFamily::CatmullRom | SplineFamily::Basis => 1,
        }
    }
}

/// Splits a flat control sequence into overlapping windows of four
/// advancing by `stride`.
///
/// Fails with `InvalidChunking` when the sequence is shorter than 4, the
/// stride is outside {1, 2, 3}, or the length does not align with the
/// stride (`(len - 4) % stride != 0` would silently drop trailing
/// controls).
pub fn to_cubic_scalars(sequence: &[f64], stride: usize) -> Result<Vec<[f64; 4]>> {
    precision::check(
        (1..=3).contains(&stride),
        SplineError::InvalidChunking(format!("stride {} is not in 1..=3", stride)),
    )?;
    precision::check(
        sequence.len() >= 4,
        SplineError::InvalidChunking(format!(
            "sequence of {} controls is shorter than one window",
            sequence.len()
        )),
    )?;
    precision::check(
        (sequence.len() - 4) % stride == 0,
        SplineError::InvalidChunking(format!(
            "sequence of {} controls does not align with stride {}",
            sequence.len(),
            stride
        )),
    )?;
    Ok((0..=sequence.len() - 4)
        .step_by(stride)
        .map(|i| [sequence[i], sequence[i + 1], sequence[i + 2], sequence[i + 3]])
        .collect())
}

/// Bezier windows: stride 3, adjacent segments share an endpoint.
pub fn to_bezier_segments(sequence: &[f64]) -> Result<Vec<[f64; 4]>> {
    to_cubic_scalars(sequence, 3)
}

/// Hermite windows: stride 2 over alternating position/tangent controls.
pub fn to_hermite_segments(sequence: &[f64]) -> Result<Vec<[f64; 4]>> {
    to_cubic_scalars(sequence, 2)
}

/// Cardinal windows: stride 1.
pub fn to_cardinal_segments(sequence: &[f64]) -> Result<Vec<[f64; 4]>> {
    to_cubic_scalars(sequence, 1)
}

/// Catmull-Rom windows: stride 1.
pub fn to_catmull_rom_segments(sequence: &[f64]) -> Result<Vec<[f64; 4]>> {
    to_cubic_scalars(sequence, 1)
}

/// B-spline windows: stride 1.
pub fn to_basis_segments(sequence: &[f64]) -> Result<Vec<[f64; 4]>> {
    to_cubic_scalars(sequence, 1)
}

/// Repeats the first and last control once: `[p0, p0.., pn, pn]`.
///
/// Gives stride-1 interpolating families a segment through every input
/// control.
pub fn duplicate_endpoints(controls: &[f64]) -> Vec<f64> {
    let mut padded = Vec::with_capacity(controls.len() + 2);
    if let Some(&first) = controls.first() {
        padded.push(first);
    }
    padded.extend_from_slice(controls);
    if let Some(&last) = controls.last() {
        padded.push(last);
    }
    padded
}

/// Repeats the first and last control twice.
///
/// Clamps a B-spline to its end controls the way a triple knot would.
pub fn triplicate_endpoints(controls: &[f64]) -> Vec<f64> {
    let mut padded = Vec::with_capacity(controls.len() + 4);
    if let Some(&first) = controls.first() {
        padded.push(first);
        padded.push(first);
    }
    padded.extend_from_slice(controls);
    if let Some(&last) = controls.last() {
        padded.push(last);
        padded.push(last);
    }
    padded
}

/// Converts a control sequence into one cubic per chunk at the default
/// precision.
pub fn chunk_coefficients(family: &SplineFamily, controls: &[f64]) -> Result<Vec<Cubic>> {
    chunk_coefficients_with_precision(family, controls, precision::DEFAULT)
}

/// Converts a control sequence into cubics retaining `digits` decimal
/// digits.
pub fn chunk_coefficients_with_precision(
    family: &SplineFamily,
    controls: &[f64],
    digits: u32,
) -> Result<Vec<Cubic>> {
    let matrix = family.characteristic_matrix_with_precision(digits);
    let chunks = to_cubic_scalars(controls, family.stride())?;
    Ok(chunks
        .into_iter()
        .map(|chunk| {
            let coefficients =
                matrix.vector_product_left(&Vector4::from_array_with_precision(chunk, digits));
            Cubic::from_vector(&coefficients)
        })
        .collect())
}
