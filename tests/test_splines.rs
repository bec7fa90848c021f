//! Characteristic matrices, chunking, and endpoint predictions per
//! spline family.

use cubica::spline::{
    chunk_coefficients, to_basis_segments, to_bezier_segments, to_cardinal_segments,
    to_catmull_rom_segments, to_cubic_scalars, to_hermite_segments,
};
use cubica::SplineFamily;

const TEST_TOL: f64 = 1e-9;

fn assert_matrix_rows(family: &SplineFamily, expected: [[f64; 4]; 4]) {
    let matrix = family.characteristic_matrix();
    for (i, row) in expected.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            assert!(
                (matrix.value(i, j) - value).abs() < TEST_TOL,
                "{:?} entry ({}, {}): {} != {}",
                family,
                i,
                j,
                matrix.value(i, j),
                value
            );
        }
    }
}

#[test]
fn bezier_characteristic_matrix() {
    assert_matrix_rows(
        &SplineFamily::Bezier,
        [
            [1.0, 0.0, 0.0, 0.0],
            [-3.0, 3.0, 0.0, 0.0],
            [3.0, -6.0, 3.0, 0.0],
            [-1.0, 3.0, -3.0, 1.0],
        ],
    );
}

#[test]
fn hermite_characteristic_matrix() {
    assert_matrix_rows(
        &SplineFamily::Hermite,
        [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-3.0, -2.0, 3.0, -1.0],
            [2.0, 1.0, -2.0, 1.0],
        ],
    );
}

#[test]
fn cardinal_characteristic_matrix_at_half_tension() {
    assert_matrix_rows(
        &SplineFamily::Cardinal { tension: 0.5 },
        [
            [0.0, 1.0, 0.0, 0.0],
            [-0.5, 0.0, 0.5, 0.0],
            [1.0, -2.5, 2.0, -0.5],
            [-0.5, 1.5, -1.5, 0.5],
        ],
    );
}

#[test]
fn basis_characteristic_matrix() {
    let sixth = 1.0 / 6.0;
    assert_matrix_rows(
        &SplineFamily::Basis,
        [
            [sixth, 4.0 * sixth, sixth, 0.0],
            [-3.0 * sixth, 0.0, 3.0 * sixth, 0.0],
            [3.0 * sixth, -sixth * 6.0, 3.0 * sixth, 0.0],
            [-sixth, 3.0 * sixth, -3.0 * sixth, sixth],
        ],
    );
}

#[test]
fn catmull_rom_equals_cardinal_half() {
    assert_eq!(
        SplineFamily::CatmullRom.characteristic_matrix(),
        SplineFamily::Cardinal { tension: 0.5 }.characteristic_matrix()
    );
}

#[test]
fn family_strides() {
    assert_eq!(SplineFamily::Bezier.stride(), 3);
    assert_eq!(SplineFamily::Hermite.stride(), 2);
    assert_eq!(SplineFamily::Cardinal { tension: 0.2 }.stride(), 1);
    assert_eq!(SplineFamily::CatmullRom.stride(), 1);
    assert_eq!(SplineFamily::Basis.stride(), 1);
}

// ===== Chunking =====

#[test]
fn bezier_chunking_shares_endpoints() {
    let segments = to_bezier_segments(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(segments, vec![[0.0, 1.0, 2.0, 3.0], [3.0, 4.0, 5.0, 6.0]]);
}

#[test]
fn bezier_chunking_rejects_stride_mismatch() {
    assert!(to_bezier_segments(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
}

#[test]
fn chunking_rejects_short_sequences_and_bad_strides() {
    assert!(to_cubic_scalars(&[1.0, 2.0, 3.0], 1).is_err());
    assert!(to_cubic_scalars(&[1.0, 2.0, 3.0, 4.0], 0).is_err());
    assert!(to_cubic_scalars(&[1.0, 2.0, 3.0, 4.0], 4).is_err());
}

#[test]
fn hermite_chunking_overlaps_by_pairs() {
    let segments = to_hermite_segments(&[0.0, 10.0, 1.0, 11.0, 2.0, 12.0]).unwrap();
    assert_eq!(
        segments,
        vec![[0.0, 10.0, 1.0, 11.0], [1.0, 11.0, 2.0, 12.0]]
    );
}

#[test]
fn cardinal_chunking_slides_by_one() {
    let segments = to_cardinal_segments(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1], [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn stride_one_helpers_agree() {
    let controls = [0.0, 1.0, 2.0, 3.0, 4.0];
    let cardinal = to_cardinal_segments(&controls).unwrap();
    assert_eq!(to_catmull_rom_segments(&controls).unwrap(), cardinal);
    assert_eq!(to_basis_segments(&controls).unwrap(), cardinal);
}

// ===== Endpoint predictions per family =====

#[test]
fn bezier_segments_interpolate_outer_controls() {
    let controls = [2.0, -1.0, 5.0, 3.0, 0.5, -2.0, 7.0];
    let cubics = chunk_coefficients(&SplineFamily::Bezier, &controls).unwrap();
    assert_eq!(cubics.len(), 2);
    assert!((cubics[0].solve(0.0) - 2.0).abs() < TEST_TOL);
    assert!((cubics[0].solve(1.0) - 3.0).abs() < TEST_TOL);
    assert!((cubics[1].solve(0.0) - 3.0).abs() < TEST_TOL);
    assert!((cubics[1].solve(1.0) - 7.0).abs() < TEST_TOL);
}

#[test]
fn hermite_segments_interpolate_positions_and_tangents() {
    // [p0, m0, p1, m1] = [1, 2, 4, -1]
    let cubics = chunk_coefficients(&SplineFamily::Hermite, &[1.0, 2.0, 4.0, -1.0]).unwrap();
    let segment = &cubics[0];
    assert!((segment.solve(0.0) - 1.0).abs() < TEST_TOL);
    assert!((segment.solve(1.0) - 4.0).abs() < TEST_TOL);
    assert!((segment.derivative().solve(0.0) - 2.0).abs() < TEST_TOL);
    assert!((segment.derivative().solve(1.0) - (-1.0)).abs() < TEST_TOL);
}

#[test]
fn catmull_rom_segments_interpolate_inner_controls() {
    let controls = [0.0, 2.0, 3.0, 1.0, -1.0];
    let cubics = chunk_coefficients(&SplineFamily::CatmullRom, &controls).unwrap();
    assert_eq!(cubics.len(), 2);
    assert!((cubics[0].solve(0.0) - 2.0).abs() < TEST_TOL);
    assert!((cubics[0].solve(1.0) - 3.0).abs() < TEST_TOL);
    assert!((cubics[1].solve(0.0) - 3.0).abs() < TEST_TOL);
    assert!((cubics[1].solve(1.0) - 1.0).abs() < TEST_TOL);
}

#[test]
fn cardinal_tension_zero_gives_flat_tangents() {
    let cubics =
        chunk_coefficients(&SplineFamily::Cardinal { tension: 0.0 }, &[0.0, 1.0, 2.0, 3.0])
            .unwrap();
    let segment = &cubics[0];
    // With zero tension the tangent rows vanish at the segment start
    assert!(segment.derivative().solve(0.0).abs() < TEST_TOL);
}

#[test]
fn basis_segment_averages_controls() {
    let cubics = chunk_coefficients(&SplineFamily::Basis, &[0.0, 6.0, 0.0, 6.0]).unwrap();
    let segment = &cubics[0];
    // B-spline start value is (p0 + 4*p1 + p2) / 6
    assert!((segment.solve(0.0) - 4.0).abs() < TEST_TOL);
    // And the end value is (p1 + 4*p2 + p3) / 6
    assert!((segment.solve(1.0) - 2.0).abs() < TEST_TOL);
}

#[test]
fn adjacent_segments_join_continuously() {
    for family in [
        SplineFamily::CatmullRom,
        SplineFamily::Basis,
        SplineFamily::Cardinal { tension: 0.25 },
    ] {
        let controls = [0.0, 1.5, -0.5, 2.0, 4.0, 3.0];
        let cubics = chunk_coefficients(&family, &controls).unwrap();
        for pair in cubics.windows(2) {
            assert!(
                (pair[0].solve(1.0) - pair[1].solve(0.0)).abs() < TEST_TOL,
                "{:?} chain breaks between segments",
                family
            );
        }
    }
}
