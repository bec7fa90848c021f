//! Degree-3 polynomial `p(x) = c0 + c1 * x + c2 * x^2 + c3 * x^3`.
//!
//! Inverse evaluation reduces to the depressed cubic `t^3 + p*t + q = 0`
//! and branches on the sign of its discriminant: three real roots go
//! through the trigonometric method, a vanishing discriminant yields the
//! closed double/triple-root forms, and a single real root goes through
//! Cardano. The discriminant is rounded to the polynomial's precision
//! before classification so that boundary cases land on the exact-zero
//! branch instead of drifting into the wrong formula.

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::polynomial::{sort_roots, Monotonicity, Quadratic};
use crate::vector::Vector4;
use crate::precision;

/// 9-point Gauss-Legendre abscissas and weights on [-1, 1].
///
/// Tabulated rather than regenerated from Legendre roots at runtime; nine
/// points integrate the arc-length integrand of a cubic to well below the
/// kernel's decimal precision.
const GAUSS_LEGENDRE_9: [(f64, f64); 9] = [
    (-0.968_160_239_507_626_1, 0.081_274_388_361_574_4),
    (-0.836_031_107_326_635_8, 0.180_648_160_694_857_4),
    (-0.613_371_432_700_590_4, 0.260_610_696_402_935_4),
    (-0.324_253_423_403_808_9, 0.312_347_077_040_002_9),
    (0.0, 0.330_239_355_001_259_8),
    (0.324_253_423_403_808_9, 0.312_347_077_040_002_9),
    (0.613_371_432_700_590_4, 0.260_610_696_402_935_4),
    (0.836_031_107_326_635_8, 0.180_648_160_694_857_4),
    (0.968_160_239_507_626_1, 0.081_274_388_361_574_4),
];

/// Cubic polynomial with a decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cubic {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
    precision: u32,
}

impl Cubic {
    /// Creates `c0 + c1*x + c2*x^2 + c3*x^3` at the default precision.
    pub fn new(c0: f64, c1: f64, c2: f64, c3: f64) -> Self {
        Self::with_precision(c0, c1, c2, c3, precision::DEFAULT)
    }

    /// Creates the polynomial retaining `digits` decimal digits.
    pub fn with_precision(c0: f64, c1: f64, c2: f64, c3: f64, digits: u32) -> Self {
        precision::assert_finite(&[c0, c1, c2, c3], "Cubic::with_precision");
        Self {
            c0: precision::round(c0, digits),
            c1: precision::round(c1, digits),
            c2: precision::round(c2, digits),
            c3: precision::round(c3, digits),
            precision: digits,
        }
    }

    /// Creates a polynomial from a coefficient vector `[c0, c1, c2, c3]`.
    pub fn from_vector(coefficients: &Vector4) -> Self {
        Self::with_precision(
            coefficients.v0(),
            coefficients.v1(),
            coefficients.v2(),
            coefficients.v3(),
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

    /// Cubic coefficient.
    #[inline]
    pub const fn c3(&self) -> f64 {
        self.c3
    }

    /// Decimal digits retained by this polynomial.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// True when the leading coefficient vanishes and the polynomial is
    /// really a quadratic.
    #[inline]
    fn is_degenerate(&self) -> bool {
        self.c3 == 0.0
    }

    fn as_quadratic(&self) -> Quadratic {
        Quadratic::with_precision(self.c0, self.c1, self.c2, self.precision)
    }

    /// Evaluates the polynomial at `x`.
    pub fn solve(&self, x: f64) -> f64 {
        precision::round(
            self.c0 + x * (self.c1 + x * (self.c2 + x * self.c3)),
            self.precision,
        )
    }

    /// Derivative evaluated without intermediate rounding; used by the
    /// arc-length quadrature.
    #[inline]
    fn slope(&self, x: f64) -> f64 {
        self.c1 + x * (2.0 * self.c2 + x * 3.0 * self.c3)
    }

    /// All real `x` with `p(x) = y`, ascending, exact ties collapsed.
    pub fn solve_inverse(&self, y: f64) -> Vec<f64> {
        if self.is_degenerate() {
            return self.as_quadratic().solve_inverse(y);
        }
        let a = self.c3;
        let b = self.c2;
        let c = self.c1;
        let d = self.c0 - y;

        // Depress: substitute x = t - b / (3a)
        let shift = b / (3.0 * a);
        let p = (3.0 * a * c - b * b) / (3.0 * a * a);
        let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);

        let discriminant = -4.0 * p * p * p - 27.0 * q * q;
        let classified = precision::round(discriminant, self.precision);

        let ts = if classified > 0.0 {
            // Three distinct real roots; p < 0 on this branch.
            let magnitude = 2.0 * (-p / 3.0).sqrt();
            let argument = ((3.0 * q / (2.0 * p)) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
            let phase = argument.acos() / 3.0;
            let third = 2.0 * std::f64::consts::PI / 3.0;
            vec![
                magnitude * phase.cos(),
                magnitude * (phase - third).cos(),
                magnitude * (phase - 2.0 * third).cos(),
            ]
        } else if classified == 0.0 {
            if precision::round(p, self.precision) == 0.0 {
                // Triple root at the inflection
                vec![0.0]
            } else {
                // A simple root and a double root
                vec![3.0 * q / p, -3.0 * q / (2.0 * p)]
            }
        } else {
            // One real root via Cardano
            let radical = (q * q / 4.0 + p * p * p / 27.0).sqrt();
            vec![(-q / 2.0 + radical).cbrt() + (-q / 2.0 - radical).cbrt()]
        };

        sort_roots(
            ts.into_iter()
                .map(|t| precision::round(t - shift, self.precision))
                .collect(),
        )
    }

    /// Derivative `c1 + 2*c2*x + 3*c3*x^2`.
    pub fn derivative(&self) -> Quadratic {
        Quadratic::with_precision(self.c1, 2.0 * self.c2, 3.0 * self.c3, self.precision)
    }

    /// All real roots of `p(x) = 0`.
    pub fn roots(&self) -> Vec<f64> {
        self.solve_inverse(0.0)
    }

    /// Parameters where the derivative vanishes: 0, 1, or 2 values.
    pub fn extrema(&self) -> Vec<f64> {
        self.derivative().roots()
    }

    /// Monotonicity over `interval`, or over the whole real line when
    /// `interval` is `None`.
    pub fn monotonicity(&self, interval: Option<&Interval>) -> Monotonicity {
        if self.is_degenerate() {
            return self.as_quadratic().monotonicity(interval);
        }
        let extrema = self.extrema();
        let interval = match interval {
            None => {
                // Unbounded: monotone exactly when the derivative never
                // changes sign, i.e. fewer than two distinct extrema.
                if extrema.len() >= 2 {
                    return Monotonicity::None;
                }
                return if self.c3 > 0.0 {
                    Monotonicity::Increasing
                } else {
                    Monotonicity::Decreasing
                };
            }
            Some(interval) => interval,
        };
        if interval.size() == 0.0 {
            return Monotonicity::Constant;
        }
        let straddled = extrema
            .iter()
            .any(|&x| interval.contains_with(x, false, false));
        if straddled {
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

    /// The y-interval produced by `x_domain`, accounting for turning
    /// points inside the domain.
    pub fn range(&self, x_domain: &Interval) -> Interval {
        let digits = self.precision.min(x_domain.precision());
        let mut candidates = vec![self.solve(x_domain.start()), self.solve(x_domain.end())];
        for extreme in self.extrema() {
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

    /// Arc length over `x_domain` by 9-point Gauss-Legendre quadrature of
    /// `sqrt(1 + p'(x)^2)`.
    pub fn length(&self, x_domain: &Interval) -> f64 {
        let digits = self.precision.min(x_domain.precision());
        if x_domain.size() == 0.0 {
            return 0.0;
        }
        if self.is_degenerate() {
            return self.as_quadratic().length(x_domain);
        }
        let mid = (x_domain.start() + x_domain.end()) / 2.0;
        let half = (x_domain.end() - x_domain.start()) / 2.0;
        let sum: f64 = GAUSS_LEGENDRE_9
            .iter()
            .map(|&(node, weight)| {
                let slope = self.slope(mid + half * node);
                weight * (1.0 + slope * slope).sqrt()
            })
            .sum();
        precision::round(half * sum, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOL: f64 = 1e-9;

    #[test]
    fn test_solve() {
        let p = Cubic::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(p.solve(0.0), 1.0);
        assert_eq!(p.solve(2.0), 9.0);
        assert_eq!(p.solve(-1.0), 0.0);
    }

    #[test]
    fn test_solve_inverse_three_roots() {
        // x^3 - x = 0 at -1, 0, 1
        let p = Cubic::new(0.0, -1.0, 0.0, 1.0);
        assert_eq!(p.solve_inverse(0.0), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_solve_inverse_double_root() {
        // (x - 1)^2 (x + 3) = x^3 + x^2 - 5x + 3
        let p = Cubic::new(3.0, -5.0, 1.0, 1.0);
        assert_eq!(p.solve_inverse(0.0), vec![-3.0, 1.0]);
    }

    #[test]
    fn test_solve_inverse_triple_root() {
        let p = Cubic::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p.solve_inverse(0.0), vec![0.0]);
    }

    #[test]
    fn test_solve_inverse_single_root() {
        // x^3 + x + 1 has one real root
        let p = Cubic::new(1.0, 1.0, 0.0, 1.0);
        let roots = p.solve_inverse(0.0);
        assert_eq!(roots.len(), 1);
        assert!((p.solve(roots[0])).abs() < TEST_TOL);
    }

    #[test]
    fn test_solve_inverse_shifted_center() {
        // (x - 2)^3 = 0 exercises the back-substitution
        let p = Cubic::new(-8.0, 12.0, -6.0, 1.0);
        assert_eq!(p.solve_inverse(0.0), vec![2.0]);
    }

    #[test]
    fn test_solve_inverse_degenerate_delegates_to_quadratic() {
        let p = Cubic::new(0.0, 1.0, 2.0, 0.0);
        assert_eq!(p.solve_inverse(0.0), vec![-0.5, 0.0]);
    }

    #[test]
    fn test_inverse_round_trip() {
        let p = Cubic::new(0.4, -2.3, 0.7, 1.1);
        for y in [-3.0, -0.5, 0.0, 1.25, 8.0] {
            let roots = p.solve_inverse(y);
            assert!(!roots.is_empty());
            for x in roots {
                assert!((p.solve(x) - y).abs() < TEST_TOL);
            }
        }
    }

    #[test]
    fn test_derivative() {
        let p = Cubic::new(7.0, 5.0, 3.0, 2.0);
        let d = p.derivative();
        assert_eq!(d.c0(), 5.0);
        assert_eq!(d.c1(), 6.0);
        assert_eq!(d.c2(), 6.0);
    }

    #[test]
    fn test_extrema() {
        // x^3 - 3x has extrema at -1 and 1
        let p = Cubic::new(0.0, -3.0, 0.0, 1.0);
        assert_eq!(p.extrema(), vec![-1.0, 1.0]);
        // The derivative vanishes there
        for x in p.extrema() {
            assert_eq!(p.derivative().solve(x), 0.0);
        }
    }

    #[test]
    fn test_extrema_empty_for_strictly_increasing() {
        let p = Cubic::new(0.0, 1.0, 0.0, 1.0);
        assert!(p.extrema().is_empty());
    }

    #[test]
    fn test_monotonicity_unbounded() {
        assert_eq!(
            Cubic::new(0.0, 1.0, 0.0, 1.0).monotonicity(None),
            Monotonicity::Increasing
        );
        assert_eq!(
            Cubic::new(0.0, -1.0, 0.0, -1.0).monotonicity(None),
            Monotonicity::Decreasing
        );
        assert_eq!(
            Cubic::new(0.0, -3.0, 0.0, 1.0).monotonicity(None),
            Monotonicity::None
        );
    }

    #[test]
    fn test_monotonicity_interval_straddles_turning_point() {
        let p = Cubic::new(0.0, -3.0, 0.0, 1.0);
        let i = Interval::new(0.0, 2.0).unwrap();
        assert_eq!(p.monotonicity(Some(&i)), Monotonicity::None);
    }

    #[test]
    fn test_monotonicity_interval_between_turning_points() {
        // x^3 - 3x decreases on [-1, 1]
        let p = Cubic::new(0.0, -3.0, 0.0, 1.0);
        let i = Interval::new(-1.0, 1.0).unwrap();
        assert_eq!(p.monotonicity(Some(&i)), Monotonicity::Decreasing);
    }

    #[test]
    fn test_monotonicity_degenerate_interval() {
        let p = Cubic::new(0.0, -3.0, 0.0, 1.0);
        assert_eq!(
            p.monotonicity(Some(&Interval::point(2.0))),
            Monotonicity::Constant
        );
    }

    #[test]
    fn test_domain() {
        let p = Cubic::new(0.0, -1.5, 0.0, 0.5);
        let d = p.domain(&Interval::new(-3.0, -2.0).unwrap()).unwrap();
        assert_eq!(d.start(), -2.355_301_397_608);
        assert_eq!(d.end(), -2.195_823_345_446);
    }

    #[test]
    fn test_domain_unreachable_for_degenerate() {
        // c3 = c2 = c1 = 0: horizontal, inverse is empty
        let p = Cubic::new(1.0, 0.0, 0.0, 0.0);
        assert!(p.domain(&Interval::new(2.0, 3.0).unwrap()).is_none());
    }

    #[test]
    fn test_range_with_turning_points() {
        // x^3 - 3x on [-2, 2]: local max 2 at x = -1, local min -2 at x = 1
        let p = Cubic::new(0.0, -3.0, 0.0, 1.0);
        let r = p.range(&Interval::new(-2.0, 2.0).unwrap());
        assert_eq!(r.start(), -2.0);
        assert_eq!(r.end(), 2.0);
    }

    #[test]
    fn test_length_degenerate_delegates() {
        let as_cubic = Cubic::new(0.0, 0.0, 1.0, 0.0);
        let as_quadratic = Quadratic::new(0.0, 0.0, 1.0);
        let domain = Interval::new(0.0, 1.0).unwrap();
        assert_eq!(as_cubic.length(&domain), as_quadratic.length(&domain));
    }

    #[test]
    fn test_length_straight_line() {
        // Degenerates through quadratic down to the exact linear form
        let p = Cubic::new(0.0, 1.0, 0.0, 0.0);
        let len = p.length(&Interval::new(0.0, 3.0).unwrap());
        assert!((len - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_length_cubic_quadrature() {
        // Arc length of x^3 over [0, 1]; reference value from Richardson-
        // extrapolated Simpson integration of sqrt(1 + 9x^4)
        let p = Cubic::new(0.0, 0.0, 0.0, 1.0);
        let len = p.length(&Interval::new(0.0, 1.0).unwrap());
        assert!((len - 1.547_875).abs() < 1e-4);
    }

    #[test]
    fn test_length_zero_size_domain() {
        let p = Cubic::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p.length(&Interval::point(0.7)), 0.0);
    }
}
