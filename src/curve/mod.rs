//! Multi-axis parametric curves over labeled axes.
//!
//! A curve holds one cubic chain per axis and dispatches every call
//! coordinate-wise. The global parameter t in [0, 1] is split uniformly
//! across the chain: chunk i of N owns [i/N, (i+1)/N] and is evaluated at
//! the local parameter `t*N - i`.
//!
//! At construction the curve eagerly builds its arc-length table: knots
//! `(t, fraction)` monotone in both fields, sampled finely enough that
//! binary search plus linear interpolation recovers the parameter for a
//! requested length fraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::polynomial::{Cubic, Monotonicity};
use crate::spline::{self, SplineFamily};
use crate::{precision, Result, SplineError};

/// A position record: axis label to coordinate.
pub type CurvePoint = BTreeMap<String, f64>;

/// Arc-length sub-samples per cubic segment; the table resolution is this
/// times the segment count.
const SAMPLES_PER_SEGMENT: usize = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct CurveAxis {
    label: String,
    polynomials: Vec<Cubic>,
}

/// One knot of the arc-length table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct LengthSample {
    t: f64,
    fraction: f64,
}

/// A parametric curve over labeled axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    axes: Vec<CurveAxis>,
    samples: Vec<LengthSample>,
    total_length: f64,
    precision: u32,
}

enum EndpointPolicy {
    Keep,
    Duplicate,
    Triplicate,
}

/// Creates a Bezier curve; the point count must be `3k + 1` with `k >= 1`.
pub fn create_bezier_curve(points: &[CurvePoint]) -> Result<Curve> {
    create_bezier_curve_with_precision(points, precision::DEFAULT)
}

/// Creates a Bezier curve retaining `digits` decimal digits.
pub fn create_bezier_curve_with_precision(points: &[CurvePoint], digits: u32) -> Result<Curve> {
    build_curve(&SplineFamily::Bezier, points, EndpointPolicy::Keep, digits)
}

/// Creates a Hermite curve from positions and per-point tangents.
pub fn create_hermite_curve(points: &[CurvePoint], tangents: &[CurvePoint]) -> Result<Curve> {
    create_hermite_curve_with_precision(points, tangents, precision::DEFAULT)
}

/// Creates a Hermite curve retaining `digits` decimal digits.
pub fn create_hermite_curve_with_precision(
    points: &[CurvePoint],
    tangents: &[CurvePoint],
    digits: u32,
) -> Result<Curve> {
    precision::check(
        points.len() == tangents.len(),
        SplineError::InvalidInput(format!(
            "{} points but {} tangents",
            points.len(),
            tangents.len()
        )),
    )?;
    // Interleave positions and tangents into the [p0, m0, p1, m1, ..]
    // control layout the Hermite matrix expects.
    let mut interleaved = Vec::with_capacity(points.len() * 2);
    for (point, tangent) in points.iter().zip(tangents) {
        interleaved.push(point.clone());
        interleaved.push(tangent.clone());
    }
    build_curve(
        &SplineFamily::Hermite,
        &interleaved,
        EndpointPolicy::Keep,
        digits,
    )
}

/// Creates a Cardinal curve with the given tension; endpoints are
/// duplicated so the curve spans every input point.
pub fn create_cardinal_curve(tension: f64, points: &[CurvePoint]) -> Result<Curve> {
    create_cardinal_curve_with_precision(tension, points, precision::DEFAULT)
}

/// Creates a Cardinal curve retaining `digits` decimal digits.
pub fn create_cardinal_curve_with_precision(
    tension: f64,
    points: &[CurvePoint],
    digits: u32,
) -> Result<Curve> {
    precision::assert_finite(&[tension], "create_cardinal_curve");
    build_curve(
        &SplineFamily::Cardinal { tension },
        points,
        EndpointPolicy::Duplicate,
        digits,
    )
}

/// Creates a Catmull-Rom curve (Cardinal with tension 0.5).
pub fn create_catmull_rom_curve(points: &[CurvePoint]) -> Result<Curve> {
    create_catmull_rom_curve_with_precision(points, precision::DEFAULT)
}

/// Creates a Catmull-Rom curve retaining `digits` decimal digits.
pub fn create_catmull_rom_curve_with_precision(
    points: &[CurvePoint],
    digits: u32,
) -> Result<Curve> {
    build_curve(
        &SplineFamily::CatmullRom,
        points,
        EndpointPolicy::Duplicate,
        digits,
    )
}

/// Creates a B-spline curve; endpoints are triplicated so the curve
/// clamps to its end controls.
pub fn create_basis_curve(points: &[CurvePoint]) -> Result<Curve> {
    create_basis_curve_with_precision(points, precision::DEFAULT)
}

/// Creates a B-spline curve retaining `digits` decimal digits.
pub fn create_basis_curve_with_precision(points: &[CurvePoint], digits: u32) -> Result<Curve> {
    build_curve(
        &SplineFamily::Basis,
        points,
        EndpointPolicy::Triplicate,
        digits,
    )
}

fn build_curve(
    family: &SplineFamily,
    points: &[CurvePoint],
    policy: EndpointPolicy,
    digits: u32,
) -> Result<Curve> {
    let labels = axis_labels(points)?;
    let mut axes = Vec::with_capacity(labels.len());
    for label in labels {
        let scalars = axis_scalars(points, &label)?;
        let controls = match policy {
            EndpointPolicy::Keep => scalars,
            EndpointPolicy::Duplicate => spline::duplicate_endpoints(&scalars),
            EndpointPolicy::Triplicate => spline::triplicate_endpoints(&scalars),
        };
        let polynomials = spline::chunk_coefficients_with_precision(family, &controls, digits)?;
        axes.push(CurveAxis { label, polynomials });
    }
    let (samples, total_length) = build_length_table(&axes, digits);
    Ok(Curve {
        axes,
        samples,
        total_length,
        precision: digits,
    })
}

/// The axis set of the first point, which every point must match exactly.
fn axis_labels(points: &[CurvePoint]) -> Result<Vec<String>> {
    let first = points.first().ok_or_else(|| {
        SplineError::InvalidInput("a curve needs at least one control point".to_string())
    })?;
    let labels: Vec<String> = first.keys().cloned().collect();
    for (index, point) in points.iter().enumerate() {
        precision::check(
            point.len() == labels.len() && labels.iter().all(|label| point.contains_key(label)),
            SplineError::InvalidInput(format!("point {} does not carry every axis", index)),
        )?;
    }
    Ok(labels)
}

fn axis_scalars(points: &[CurvePoint], label: &str) -> Result<Vec<f64>> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let value = point.get(label).copied().ok_or_else(|| {
                SplineError::InvalidInput(format!("point {} is missing axis {}", index, label))
            })?;
            precision::assert_finite(&[value], "curve control point");
            Ok(value)
        })
        .collect()
}

/// Samples cumulative arc length, summed across the component
/// polynomials, at `SAMPLES_PER_SEGMENT` sub-intervals per segment and
/// normalizes into fractions of the total.
fn build_length_table(axes: &[CurveAxis], digits: u32) -> (Vec<LengthSample>, f64) {
    let segments = axes.first().map(|axis| axis.polynomials.len()).unwrap_or(0);
    let resolution = segments * SAMPLES_PER_SEGMENT;
    let mut cumulative = vec![0.0; resolution + 1];
    for step in 1..=resolution {
        let segment = (step - 1) / SAMPLES_PER_SEGMENT;
        let offset = ((step - 1) % SAMPLES_PER_SEGMENT) as f64;
        let local = Interval::ordered(
            offset / SAMPLES_PER_SEGMENT as f64,
            (offset + 1.0) / SAMPLES_PER_SEGMENT as f64,
            digits,
        );
        let length: f64 = axes
            .iter()
            .map(|axis| axis.polynomials[segment].length(&local))
            .sum();
        cumulative[step] = cumulative[step - 1] + length;
    }
    let total = cumulative[resolution];
    let samples = (0..=resolution)
        .map(|step| {
            let t = step as f64 / resolution as f64;
            let fraction = if total > 0.0 {
                cumulative[step] / total
            } else {
                // Degenerate curve: identity keeps the table monotone.
                t
            };
            LengthSample { t, fraction }
        })
        .collect();
    (samples, total)
}

impl Curve {
    /// Axis labels in storage order.
    pub fn axes(&self) -> Vec<&str> {
        self.axes.iter().map(|axis| axis.label.as_str()).collect()
    }

    /// Number of cubic segments per axis chain.
    pub fn segment_count(&self) -> usize {
        self.axes
            .first()
            .map(|axis| axis.polynomials.len())
            .unwrap_or(0)
    }

    /// Total arc length, rounded to the curve precision.
    pub fn length(&self) -> f64 {
        precision::round(self.total_length, self.precision)
    }

    /// Decimal digits retained by this curve.
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Evaluates the curve.
    ///
    /// `input` is the raw parameter and `normalize` blends between raw
    /// and length-normalized parameterization: `t = (1 - normalize) *
    /// input + normalize * lookup(input)`. At `normalize = 1` equal input
    /// steps travel equal arc lengths. Both arguments must lie in
    /// [0, 1].
    pub fn position_at(&self, input: f64, normalize: f64) -> Result<CurvePoint> {
        precision::assert_finite(&[input, normalize], "Curve::position_at");
        precision::check(
            (0.0..=1.0).contains(&input),
            SplineError::InvalidInput(format!("parameter {} is outside [0, 1]", input)),
        )?;
        precision::check(
            (0.0..=1.0).contains(&normalize),
            SplineError::InvalidInput(format!("normalize {} is outside [0, 1]", normalize)),
        )?;
        let t = (1.0 - normalize) * input + normalize * self.lookup(input);
        Ok(self.point_at(t))
    }

    /// Inverts the curve on `axis`: finds the t with that coordinate at
    /// `position` and returns the full point there.
    ///
    /// The axis chain must be strictly monotone over the whole parameter
    /// range; a chain with any turning point (or any constant segment)
    /// fails with `NonMonotonicAxis`, and a position no parameter reaches
    /// fails with `RootUnsolvable`.
    pub fn solve_where(&self, axis: &str, position: f64) -> Result<CurvePoint> {
        precision::assert_finite(&[position], "Curve::solve_where");
        let target = self
            .axes
            .iter()
            .find(|candidate| candidate.label == axis)
            .ok_or_else(|| SplineError::InvalidInput(format!("unknown axis {}", axis)))?;

        let unit = Interval::ordered(0.0, 1.0, self.precision);
        let mut direction: Option<Monotonicity> = None;
        for polynomial in &target.polynomials {
            let segment_monotonicity = polynomial.monotonicity(Some(&unit));
            let consistent = segment_monotonicity.is_strict()
                && direction.map_or(true, |d| d == segment_monotonicity);
            precision::check(
                consistent,
                SplineError::NonMonotonicAxis(format!(
                    "axis {} is not strictly monotone over the curve",
                    axis
                )),
            )?;
            direction = Some(segment_monotonicity);
        }

        let count = target.polynomials.len();
        for (index, polynomial) in target.polynomials.iter().enumerate() {
            for root in polynomial.solve_inverse(position) {
                if (0.0..=1.0).contains(&root) {
                    let t = (index as f64 + root) / count as f64;
                    return Ok(self.point_at(t));
                }
            }
        }
        Err(SplineError::RootUnsolvable(format!(
            "no parameter maps axis {} to {}",
            axis, position
        )))
    }

    /// Looks up the parameter producing a given arc-length fraction:
    /// binary search over the monotone table, then linear interpolation
    /// between the bracketing knots.
    fn lookup(&self, fraction: f64) -> f64 {
        let samples = &self.samples;
        let last = samples.len() - 1;
        if fraction <= samples[0].fraction {
            return samples[0].t;
        }
        if fraction >= samples[last].fraction {
            return samples[last].t;
        }
        let mut lo = 0;
        let mut hi = last;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if samples[mid].fraction <= fraction {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let below = samples[lo];
        let above = samples[hi];
        if above.fraction == below.fraction {
            return below.t;
        }
        let weight = (fraction - below.fraction) / (above.fraction - below.fraction);
        below.t + weight * (above.t - below.t)
    }

    /// Evaluates every axis chain at global parameter `t`.
    fn point_at(&self, t: f64) -> CurvePoint {
        self.axes
            .iter()
            .map(|axis| (axis.label.clone(), solve_chain(&axis.polynomials, t)))
            .collect()
    }
}

/// Evaluates a cubic chain at global parameter `t` by locating the owning
/// segment and evaluating it at the local parameter.
fn solve_chain(polynomials: &[Cubic], t: f64) -> f64 {
    let count = polynomials.len();
    let scaled = t * count as f64;
    let index = (scaled.floor() as usize).min(count - 1);
    let local = scaled - index as f64;
    polynomials[index].solve(local)
}
