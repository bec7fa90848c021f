//! Decimal precision and rounding.
//!
//! Every number-carrying value in the kernel stores the number of decimal
//! digits it retains, and every outward-facing scalar passes through
//! [`round`] at that precision. Precision is a value parameter, never
//! global state.

use crate::{Result, SplineError};

/// Default number of decimal digits retained by every value.
pub const DEFAULT: u32 = 12;

/// Largest useful decimal precision for an f64. Rounding at or above this
/// many digits cannot change the value, so [`round`] short-circuits.
pub const MAX: u32 = 15;

/// Rounds `value` to `digits` decimal digits, half away from zero.
///
/// Non-finite inputs and inputs whose scaled form overflows are returned
/// unchanged; the constructors reject non-finite values before they reach
/// arithmetic, so this guard only matters for intermediate magnitudes.
#[inline]
pub fn round(value: f64, digits: u32) -> f64 {
    if digits >= MAX || !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Smallest value in a non-empty slice.
#[inline]
pub fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value in a non-empty slice.
#[inline]
pub fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Invariant check: returns `error` when `condition` does not hold.
#[inline]
pub fn check(condition: bool, error: SplineError) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(error)
    }
}

/// Asserts that every input scalar is finite.
///
/// NaN and infinity are programmer errors at construction time; letting
/// them propagate would poison every downstream rounding and comparison.
#[inline]
pub fn assert_finite(values: &[f64], context: &str) {
    for value in values {
        assert!(
            value.is_finite(),
            "{}: non-finite component {}",
            context,
            value
        );
    }
}
