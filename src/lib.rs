//! cubica: parametric cubic spline kernel
//!
//! Closed-form algebra for splines built from cubic polynomial segments:
//! - Polynomials of degree 1-3 with exact root-finding, monotonicity
//!   analysis, derivative/antiderivative calculus, and arc length
//! - Fixed 4x4 characteristic matrices for the Bezier, Hermite, Cardinal,
//!   Catmull-Rom, and B-spline (basis) families
//! - A multi-axis `Curve` over arbitrary labeled axes supporting
//!   evaluation, inversion on a monotonic axis, and arc-length sampling
//!
//! Every value is immutable; every outward-facing scalar is rounded to the
//! value's decimal precision at construction.

pub mod precision;
pub mod interval;
pub mod vector;
pub mod matrix;
pub mod polynomial;
pub mod spline;
pub mod curve;

// Re-exports for convenience
pub use interval::Interval;
pub use vector::{Vector2, Vector3, Vector4};
pub use matrix::{Matrix2x2, Matrix3x3, Matrix4x4};
pub use polynomial::{Cubic, Linear, Monotonicity, Quadratic};
pub use spline::SplineFamily;
pub use curve::{
    create_basis_curve, create_bezier_curve, create_cardinal_curve, create_catmull_rom_curve,
    create_hermite_curve, Curve, CurvePoint,
};

/// Result type for spline operations
pub type Result<T> = std::result::Result<T, SplineError>;

#[derive(Debug, thiserror::Error)]
pub enum SplineError {
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid chunking: {0}")]
    InvalidChunking(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Singular matrix: {0}")]
    SingularMatrix(String),

    #[error("Non-monotonic axis: {0}")]
    NonMonotonicAxis(String),

    #[error("Root unsolvable: {0}")]
    RootUnsolvable(String),
}
