//! Degree-1 polynomial `p(x) = c0 + c1 * x`.

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::polynomial::{sort_roots, Monotonicity, Quadratic};
use crate::vector::Vector2;
use crate::precision;

/// Linear polynomial with a decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    c0: f64,
    c1: f64,
    precision: u32,
}

impl Linear {
    /// Creates `c0 + c1 * x` at the default precision.
    pub fn new(c0: f64, c1: f64) -> Self {
        Self::with_precision(c0, c1, precision::DEFAULT)
    }

    /// Creates `c0 + c1 * x` retaining `digits` decimal digits.
    pub fn with_precision(c0: f64, c1: f64, digits: u32) -> Self {
        precision::assert_finite(&[c0, c1], "Linear::with_precision");
        Self {
            c0: precision::round(c0, digits),
            c1: precision::round(c1, digits),
            precision: digits,
        }
    }

    /// Creates a polynomial from a coefficient vector `[c0, c1]`.
    pub fn from_vector(coefficients: &Vector2) -> Self {
        Self::with_precision(
            coefficients.v0(),
            coefficients.v1(),
            coefficients.precision(),
        )
    }

    /// Constant coefficient.
    #[inline]
    pub const fn c0(&self) -> f64 {
        self.c0
    }

    /// Slope coefficient.
    #[inline]
    pub const fn c1(&self) -> f64 {
        self.c1
    }

    /// Decimal digits retained by this polynomial.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Evaluates the polynomial at `x`.
    pub fn solve(&self, x: f64) -> f64 {
        precision::round(self.c0 + self.c1 * x, self.precision)
    }

    /// All real `x` with `p(x) = y`.
    ///
    /// A horizontal line yields no roots: the equation is then either
    /// unsatisfiable or universally satisfied, and neither is a root set.
    pub fn solve_inverse(&self, y: f64) -> Vec<f64> {
        if self.c1 == 0.0 {
            return Vec::new();
        }
        sort_roots(vec![precision::round(
            (y - self.c0) / self.c1,
            self.precision,
        )])
    }

    /// Derivative: the constant `c1`, kept linear with zero slope.
    pub fn derivative(&self) -> Linear {
        Linear::with_precision(self.c1, 0.0, self.precision)
    }

    /// Antiderivative with integration constant `k`.
    pub fn antiderivative(&self, k: f64) -> Quadratic {
        Quadratic::with_precision(k, self.c0, self.c1 / 2.0, self.precision)
    }

    /// All real roots of `p(x) = 0`.
    pub fn roots(&self) -> Vec<f64> {
        self.solve_inverse(0.0)
    }

    /// Monotonicity over the whole real line.
    pub fn monotonicity(&self) -> Monotonicity {
        if self.c1 > 0.0 {
            Monotonicity::Increasing
        } else if self.c1 < 0.0 {
            Monotonicity::Decreasing
        } else {
            Monotonicity::Constant
        }
    }

    /// The x-interval mapped onto `y_range`, or `None` for a horizontal
    /// line.
    pub fn domain(&self, y_range: &Interval) -> Option<Interval> {
        let digits = self.precision.min(y_range.precision());
        let mut endpoints = self.solve_inverse(y_range.start());
        endpoints.extend(self.solve_inverse(y_range.end()));
        if endpoints.is_empty() {
            return None;
        }
        Some(Interval::ordered(
            precision::min_of(&endpoints),
            precision::max_of(&endpoints),
            digits,
        ))
    }

    /// The y-interval produced by `x_domain`.
    pub fn range(&self, x_domain: &Interval) -> Interval {
        let digits = self.precision.min(x_domain.precision());
        Interval::ordered(
            self.solve(x_domain.start()),
            self.solve(x_domain.end()),
            digits,
        )
    }

    /// Arc length over `x_domain`: `sqrt(1 + c1^2) * size`.
    pub fn length(&self, x_domain: &Interval) -> f64 {
        let digits = self.precision.min(x_domain.precision());
        precision::round(
            (1.0 + self.c1 * self.c1).sqrt() * x_domain.size(),
            digits,
        )
    }
}
