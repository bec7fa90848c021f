//! Square matrices 2x2, 3x3, and 4x4.
//!
//! Row-major immutable values with determinants, minors, row/column views,
//! and linear-system solving via Cramer's rule. The 4x4 is the workhorse:
//! every spline family is a constant 4x4 characteristic matrix applied to
//! a control chunk.

mod mat2;
mod mat3;
mod mat4;

pub use mat2::Matrix2x2;
pub use mat3::Matrix3x3;
pub use mat4::Matrix4x4;
