//! Four-valued monotonicity classification.

use serde::{Deserialize, Serialize};

/// Whether a function is order-preserving over a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Monotonicity {
    /// Strictly order-preserving.
    Increasing,
    /// Strictly order-reversing.
    Decreasing,
    /// Constant over the domain.
    Constant,
    /// Neither: the domain straddles at least one turning point.
    None,
}

impl Monotonicity {
    /// Classifies by comparing the values at the domain endpoints.
    ///
    /// Callers must rule out interior turning points first; this is the
    /// final tie-break once the function is known to be monotone on the
    /// domain.
    pub fn from_comparison(ys: f64, ye: f64) -> Self {
        if ye > ys {
            Monotonicity::Increasing
        } else if ye < ys {
            Monotonicity::Decreasing
        } else {
            Monotonicity::Constant
        }
    }

    /// True for `Increasing` and `Decreasing`: the function is invertible
    /// on the domain.
    #[inline]
    pub fn is_strict(&self) -> bool {
        matches!(self, Monotonicity::Increasing | Monotonicity::Decreasing)
    }
}
