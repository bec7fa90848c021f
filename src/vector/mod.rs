//! Fixed-size numeric tuples.
//!
//! `Vector2`, `Vector3`, and `Vector4` are immutable coordinate carriers
//! used for polynomial coefficients, matrix rows/columns, and control
//! chunks. Components are rounded to the vector's precision at
//! construction; derived scalars take the minimum precision of the
//! operands.

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;
