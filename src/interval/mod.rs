//! Closed interval `[start, end]` on the real line.
//!
//! Construction enforces `start <= end`; everything else is derived. The
//! interval carries its own decimal precision like every value in the
//! kernel.

use serde::{Deserialize, Serialize};

use crate::{precision, Result, SplineError};

/// A closed interval `[start, end]` with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    start: f64,
    end: f64,
    precision: u32,
}

impl Interval {
    /// Creates `[start, end]` at the default precision.
    ///
    /// Fails with `InvalidInterval` when `end < start`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        Self::with_precision(start, end, precision::DEFAULT)
    }

    /// Creates `[start, end]` retaining `digits` decimal digits.
    pub fn with_precision(start: f64, end: f64, digits: u32) -> Result<Self> {
        precision::assert_finite(&[start, end], "Interval::with_precision");
        let start = precision::round(start, digits);
        let end = precision::round(end, digits);
        precision::check(
            end >= start,
            SplineError::InvalidInterval(format!("end {} is less than start {}", end, start)),
        )?;
        Ok(Self {
            start,
            end,
            precision: digits,
        })
    }

    /// Creates the degenerate interval `[value, value]`.
    pub fn point(value: f64) -> Self {
        precision::assert_finite(&[value], "Interval::point");
        let value = precision::round(value, precision::DEFAULT);
        Self {
            start: value,
            end: value,
            precision: precision::DEFAULT,
        }
    }

    /// Creates the smallest interval covering every input value.
    ///
    /// Fails with `InvalidInput` on an empty slice.
    pub fn from_min_max(values: &[f64]) -> Result<Self> {
        Self::from_min_max_with_precision(values, precision::DEFAULT)
    }

    /// Creates the covering interval retaining `digits` decimal digits.
    pub fn from_min_max_with_precision(values: &[f64], digits: u32) -> Result<Self> {
        precision::check(
            !values.is_empty(),
            SplineError::InvalidInput("from_min_max requires at least one value".to_string()),
        )?;
        Self::with_precision(precision::min_of(values), precision::max_of(values), digits)
    }

    /// Orders `a` and `b` before construction. Internal helper for
    /// operations that compute endpoints in unknown order.
    pub(crate) fn ordered(a: f64, b: f64, digits: u32) -> Self {
        let start = a.min(b);
        let end = a.max(b);
        Self {
            start: precision::round(start, digits),
            end: precision::round(end, digits),
            precision: digits,
        }
    }

    /// Lower endpoint.
    #[inline]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Upper endpoint.
    #[inline]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Decimal digits retained by this interval.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Length of the interval, `end - start`.
    #[inline]
    pub fn size(&self) -> f64 {
        precision::round(self.end - self.start, self.precision)
    }

    /// Closed-interval membership.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.contains_with(x, true, true)
    }

    /// Membership with configurable endpoint inclusion.
    pub fn contains_with(&self, x: f64, include_start: bool, include_end: bool) -> bool {
        let above = if include_start {
            x >= self.start
        } else {
            x > self.start
        };
        let below = if include_end { x <= self.end } else { x < self.end };
        above && below
    }

    /// Clamps `x` into the interval.
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.start).min(self.end)
    }

    /// Maps `t` in [0, 1] onto the interval: `start + t * size`.
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        precision::round(self.start + t * (self.end - self.start), self.precision)
    }

    /// Maps `x` in the interval onto [0, 1]: `(x - start) / size`.
    ///
    /// A degenerate interval normalizes everything to 0 so that no NaN
    /// escapes the kernel.
    #[inline]
    pub fn normalize(&self, x: f64) -> f64 {
        let size = self.end - self.start;
        if size == 0.0 {
            return 0.0;
        }
        precision::round((x - self.start) / size, self.precision)
    }

    /// Carries `x` from this interval onto `to`.
    #[inline]
    pub fn remap(&self, x: f64, to: &Interval) -> f64 {
        to.lerp(self.normalize(x))
    }

    /// Retains the values inside the interval, preserving input order.
    pub fn filter(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .copied()
            .filter(|&x| self.contains(x))
            .collect()
    }
}
