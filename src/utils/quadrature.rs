/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Newton-Cotes quadrature on piecewise-uniform meshes
//!
//! The radial mesh doubles its step at every block boundary, so a single
//! equal-spacing rule is not valid over the whole mesh. [`integrate_mesh`]
//! splits the requested range into runs of constant step and applies
//! Simpson's rule to each run, closing an odd run with the trapezoidal rule.

use super::errors::{Result, UtilsError};

/// Two consecutive steps are treated as equal when they differ by less than this
const STEP_TOLERANCE: f64 = 1.0e-12;

/// Closed two-point Newton-Cotes rule (trapezoidal rule) for one interval
pub fn newton_cotes_two_point(step: f64, y1: f64, y2: f64) -> f64 {
    0.5 * step * (y1 + y2)
}

/// Closed three-point Newton-Cotes rule (Simpson's rule) for two intervals
pub fn newton_cotes_three_point(step: f64, y1: f64, y2: f64, y3: f64) -> f64 {
    step / 3.0 * (y1 + 4.0 * y2 + y3)
}

/// Composite rule over equally spaced values
fn composite_newton_cotes(step: f64, values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let intervals = values.len() - 1;
    let paired_end = 2 * (intervals / 2);

    let mut sum: f64 = (0..paired_end)
        .step_by(2)
        .map(|i| newton_cotes_three_point(step, values[i], values[i + 1], values[i + 2]))
        .sum();

    if intervals % 2 == 1 {
        sum += newton_cotes_two_point(step, values[paired_end], values[paired_end + 1]);
    }

    sum
}

/// A maximal stretch of the mesh with constant step size
#[derive(Debug, Clone, Copy, PartialEq)]
struct UniformRun {
    start: usize,
    end: usize,
    step: f64,
}

/// Split `x[lo..=hi]` into runs of constant step size
fn uniform_runs(x: &[f64], lo: usize, hi: usize) -> Vec<UniformRun> {
    let mut runs = Vec::new();
    let mut start = lo;
    let mut step = x[lo + 1] - x[lo];

    for i in (lo + 1)..hi {
        let dx = x[i + 1] - x[i];
        if (dx - step).abs() >= STEP_TOLERANCE {
            runs.push(UniformRun {
                start,
                end: i,
                step,
            });
            start = i;
            step = dx;
        }
    }

    runs.push(UniformRun {
        start,
        end: hi,
        step,
    });
    runs
}

/// Integrate `y(x)` from `x[lo]` to `x[hi]` on a piecewise-uniform mesh
///
/// # Arguments
///
/// * `x` - Mesh points in increasing order
/// * `y` - Function values at each mesh point
/// * `lo` - Index of the lower integration bound
/// * `hi` - Index of the upper integration bound (inclusive)
///
/// # Returns
///
/// The integral, or `DimensionMismatch` when `x` and `y` differ in length
pub fn integrate_mesh(x: &[f64], y: &[f64], lo: usize, hi: usize) -> Result<f64> {
    if x.len() != y.len() {
        return Err(UtilsError::DimensionMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }

    if lo > hi || hi >= x.len() {
        return Err(UtilsError::InvalidRange {
            lo,
            hi,
            len: x.len(),
        });
    }

    if lo == hi {
        return Ok(0.0);
    }

    Ok(uniform_runs(x, lo, hi)
        .into_iter()
        .map(|run| composite_newton_cotes(run.step, &y[run.start..=run.end]))
        .sum())
}

/// Logarithmic derivative f'(x)/f(x) from a central difference
///
/// The triple does not need to be equally spaced; the derivative is the
/// slope of the chord through the outer two points.
pub fn grid_log_derivative(
    f_prev: f64,
    f: f64,
    f_next: f64,
    x_prev: f64,
    x_next: f64,
) -> f64 {
    let derivative = (f_next - f_prev) / (x_next - x_prev);
    derivative / f
}
