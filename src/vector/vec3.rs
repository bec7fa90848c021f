//! 3-component vector.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::precision;

/// Immutable triple of scalars with a decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    v0: f64,
    v1: f64,
    v2: f64,
    precision: u32,
}

impl Vector3 {
    /// Creates a vector at the default precision.
    pub fn new(v0: f64, v1: f64, v2: f64) -> Self {
        Self::with_precision(v0, v1, v2, precision::DEFAULT)
    }

    /// Creates a vector retaining `digits` decimal digits.
    pub fn with_precision(v0: f64, v1: f64, v2: f64, digits: u32) -> Self {
        precision::assert_finite(&[v0, v1, v2], "Vector3::with_precision");
        Self {
            v0: precision::round(v0, digits),
            v1: precision::round(v1, digits),
            v2: precision::round(v2, digits),
            precision: digits,
        }
    }

    /// Creates a vector from an array at the default precision.
    pub fn from_array(components: [f64; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }

    /// First component.
    #[inline]
    pub const fn v0(&self) -> f64 {
        self.v0
    }

    /// Second component.
    #[inline]
    pub const fn v1(&self) -> f64 {
        self.v1
    }

    /// Third component.
    #[inline]
    pub const fn v2(&self) -> f64 {
        self.v2
    }

    /// Decimal digits retained by this vector.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Components in order.
    #[inline]
    pub const fn components(&self) -> [f64; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Dot product, rounded to the minimum of the operands' precisions.
    pub fn dot(&self, other: &Vector3) -> f64 {
        let digits = self.precision.min(other.precision);
        precision::round(
            self.v0 * other.v0 + self.v1 * other.v1 + self.v2 * other.v2,
            digits,
        )
    }

    /// Exact equality of components and precision.
    #[inline]
    pub fn is_identical(&self, other: &Vector3) -> bool {
        self == other
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.v0,
            1 => &self.v1,
            2 => &self.v2,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from(components: [f64; 3]) -> Self {
        Self::from_array(components)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.components()
    }
}
