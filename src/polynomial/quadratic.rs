//! Degree-2 polynomial `p(x) = c0 + c1 * x + c2 * x^2`.

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::polynomial::{sort_roots, Cubic, Linear, Monotonicity};
use crate::vector::Vector3;
use crate::precision;

/// Quadratic polynomial with a decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quadratic {
    c0: f64,
    c1: f64,
    c2: f64,
    precision: u32,
}

impl Quadratic {
    /// Creates `c0 + c1 * x + c2 * x^2` at the default precision.
    pub fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self::with_precision(c0, c1, c2, precision::DEFAULT)
    }

    /// Creates the polynomial retaining `digits` decimal digits.
    pub fn with_precision(c0: f64, c1: f64, c2: f64, digits: u32) -> Self {
        precision::assert_finite(&[c0, c1, c2], "Quadratic::with_precision");
        Self {
            c0: precision::round(c0, digits),
            c1: precision::round(c1, digits),
            c2: precision::round(c2, digits),
            precision: digits,
        }
    }

    /// Creates a polynomial from a coefficient vector `[c0, c1, c2]`.
    pub fn from_vector(coefficients: &Vector3) -> Self {
        Self::with_precision(
            coefficients.v0(),
            coefficients.v1(),
            coefficients.v2(),
            coefficients.precision(),
        )
    }

    /// Constant coefficient.
    #[inline]
    pub const fn c0(&self) -> f64 {
        self.c0
    }

    /// Linear coefficient.
    #[inline]
    pub const fn c1(&self) -> f64 {
        self.c1
    }

    /// Quadratic coefficient.
    #[inline]
    pub const fn c2(&self) -> f64 {
        self.c2
    }

    /// Decimal digits retained by this polynomial.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// True when the leading coefficient vanishes and the polynomial is
    /// really a line.
    #[inline]
    fn is_degenerate(&self) -> bool {
        self.c2 == 0.0
    }

    fn as_linear(&self) -> Linear {
        Linear::with_precision(self.c0, self.c1, self.precision)
    }

    /// Evaluates the polynomial at `x`.
    pub fn solve(&self, x: f64) -> f64 {
        precision::round(self.c0 + x * (self.c1 + x * self.c2), self.precision)
    }

    /// All real `x` with `p(x) = y`, ascending, exact ties collapsed.
    ///
    /// The discriminant is rounded to the polynomial's precision before
    /// its sign is classified; that rounding is what makes "exactly zero"
    /// well-defined in floating point.
    pub fn solve_inverse(&self, y: f64) -> Vec<f64> {
        if self.is_degenerate() {
            return self.as_linear().solve_inverse(y);
        }
        let discriminant = self.c1 * self.c1 - 4.0 * self.c2 * (self.c0 - y);
        let classified = precision::round(discriminant, self.precision);
        if classified < 0.0 {
            return Vec::new();
        }
        if classified == 0.0 {
            return sort_roots(vec![precision::round(
                -self.c1 / (2.0 * self.c2),
                self.precision,
            )]);
        }
        let sqrt_d = discriminant.sqrt();
        sort_roots(vec![
            precision::round((-self.c1 - sqrt_d) / (2.0 * self.c2), self.precision),
            precision::round((-self.c1 + sqrt_d) / (2.0 * self.c2), self.precision),
        ])
    }

    /// Derivative `c1 + 2 * c2 * x`.
    pub fn derivative(&self) -> Linear {
        Linear::with_precision(self.c1, 2.0 * self.c2, self.precision)
    }

    /// Antiderivative with integration constant `k`.
    pub fn antiderivative(&self, k: f64) -> Cubic {
        Cubic::with_precision(k, self.c0, self.c1 / 2.0, self.c2 / 3.0, self.precision)
    }

    /// All real roots of `p(x) = 0`.
    pub fn roots(&self) -> Vec<f64> {
        self.solve_inverse(0.0)
    }

    /// The x where the derivative vanishes: `None` when the polynomial is
    /// constant, `0` when it is a non-constant line.
    pub fn extreme(&self) -> Option<f64> {
        if self.is_degenerate() {
            if self.c1 == 0.0 {
                return None;
            }
            return Some(0.0);
        }
        Some(precision::round(-self.c1 / (2.0 * self.c2), self.precision))
    }

    /// Monotonicity over `interval`, or over the whole real line when
    /// `interval` is `None`.
    pub fn monotonicity(&self, interval: Option<&Interval>) -> Monotonicity {
        if self.c1 == 0.0 && self.c2 == 0.0 {
            return Monotonicity::Constant;
        }
        if self.is_degenerate() {
            return self.as_linear().monotonicity();
        }
        let interval = match interval {
            // A genuine parabola always turns somewhere.
            None => return Monotonicity::None,
            Some(interval) => interval,
        };
        if interval.size() == 0.0 {
            return Monotonicity::Constant;
        }
        let extreme = -self.c1 / (2.0 * self.c2);
        if interval.contains_with(extreme, false, false) {
            return Monotonicity::None;
        }
        Monotonicity::from_comparison(self.solve(interval.start()), self.solve(interval.end()))
    }

    /// The x-interval covering every solution of `p(x) = y` for y at the
    /// ends of `y_range`, or `None` when neither end is reached.
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

    /// The y-interval produced by `x_domain`, accounting for a vertex
    /// inside the domain.
    pub fn range(&self, x_domain: &Interval) -> Interval {
        let digits = self.precision.min(x_domain.precision());
        let mut candidates = vec![self.solve(x_domain.start()), self.solve(x_domain.end())];
        if let Some(extreme) = self.extreme() {
            if x_domain.contains(extreme) {
                candidates.push(self.solve(extreme));
            }
        }
        Interval::ordered(
            precision::min_of(&candidates),
            precision::max_of(&candidates),
            digits,
        )
    }

    /// Arc length over `x_domain`, closed form.
    ///
    /// With `d(x) = c1 + 2*c2*x` the antiderivative of `sqrt(1 + d^2)` is
    /// `(d * sqrt(1 + d^2) + ln|d + sqrt(1 + d^2)|) / (4 * c2)`.
    pub fn length(&self, x_domain: &Interval) -> f64 {
        let digits = self.precision.min(x_domain.precision());
        if x_domain.size() == 0.0 {
            return 0.0;
        }
        if self.is_degenerate() {
            return self.as_linear().length(x_domain);
        }
        let primitive = |x: f64| {
            let d = self.c1 + 2.0 * self.c2 * x;
            let hyp = (1.0 + d * d).sqrt();
            (d * hyp + (d + hyp).abs().ln()) / (4.0 * self.c2)
        };
        precision::round(primitive(x_domain.end()) - primitive(x_domain.start()), digits)
    }
}
