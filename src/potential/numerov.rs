/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Numerov method implementation for solving second-order differential equations
//!
//! The Numerov method is a fourth-order scheme for equations of the form
//! y''(x) = -g(x)y(x) + s(x), which includes the radial Schrödinger equation
//! for P(r) = r·ψ(r) with s ≡ 0.

use crate::utils::errors::UtilsError;

use super::errors::Result;

fn check_dimensions(x: &[f64], g: &[f64], s: &[f64]) -> Result<()> {
    for other in [g.len(), s.len()] {
        if other != x.len() {
            return Err(UtilsError::DimensionMismatch {
                expected: x.len(),
                found: other,
            }
            .into());
        }
    }

    if x.len() < 2 {
        return Err(UtilsError::TooFewPoints {
            required: 2,
            found: x.len(),
        }
        .into());
    }

    Ok(())
}

/// Integrates y'' = -g·y + s forward from two starting values
///
/// The recurrence relation is
/// (1 + h²/12·g[i+1])·y[i+1] = 2·(1 - 5h²/12·g[i])·y[i] - (1 + h²/12·g[i-1])·y[i-1]
///                              + h²/12·(s[i+1] + 10·s[i] + s[i-1])
/// with h = x[i+1] - x[i] recomputed at each step, so every three-point
/// stencil is treated as locally uniform.
///
/// # Arguments
///
/// * `x` - The grid points
/// * `g` - The g(x) coefficient at each grid point
/// * `s` - The source term s(x) at each grid point
/// * `y_first` - Value at `x[0]`
/// * `y_second` - Value at `x[1]`
///
/// # Returns
///
/// The solution at every grid point, aligned with `x`
pub fn numerov_forward(
    x: &[f64],
    g: &[f64],
    s: &[f64],
    y_first: f64,
    y_second: f64,
) -> Result<Vec<f64>> {
    check_dimensions(x, g, s)?;

    let n = x.len();
    let mut y = Vec::with_capacity(n);
    y.push(y_first);
    y.push(y_second);

    for i in 1..n - 1 {
        let h = x[i + 1] - x[i];
        let h_squared_12 = h * h / 12.0;

        let next = (2.0 * y[i] * (1.0 - 5.0 * h_squared_12 * g[i])
            - y[i - 1] * (1.0 + h_squared_12 * g[i - 1])
            + h_squared_12 * (s[i + 1] + 10.0 * s[i] + s[i - 1]))
            / (1.0 + h_squared_12 * g[i + 1]);
        y.push(next);
    }

    Ok(y)
}

/// Integrates y'' = -g·y + s backward from the last two values
///
/// Mirror image of [`numerov_forward`]: the recurrence runs from the last
/// index toward the first with h = x[i-1] - x[i].
///
/// # Returns
///
/// The solution at every grid point, aligned with `x` (ascending order)
pub fn numerov_backward(
    x: &[f64],
    g: &[f64],
    s: &[f64],
    y_last: f64,
    y_second_last: f64,
) -> Result<Vec<f64>> {
    check_dimensions(x, g, s)?;

    let n = x.len();
    let mut y = vec![0.0; n];
    y[n - 1] = y_last;
    y[n - 2] = y_second_last;

    for i in (1..n - 1).rev() {
        let h = x[i - 1] - x[i];
        let h_squared_12 = h * h / 12.0;

        y[i - 1] = (2.0 * y[i] * (1.0 - 5.0 * h_squared_12 * g[i])
            - y[i + 1] * (1.0 + h_squared_12 * g[i + 1])
            + h_squared_12 * (s[i + 1] + 10.0 * s[i] + s[i - 1]))
            / (1.0 + h_squared_12 * g[i - 1]);
    }

    Ok(y)
}

/// Outward integration of the radial Schrödinger equation P'' = -g·P
pub fn schrodinger_forward(r: &[f64], g: &[f64], p_first: f64, p_second: f64) -> Result<Vec<f64>> {
    let source = vec![0.0; r.len()];
    numerov_forward(r, g, &source, p_first, p_second)
}

/// Inward integration of the radial Schrödinger equation P'' = -g·P
pub fn schrodinger_backward(
    r: &[f64],
    g: &[f64],
    p_last: f64,
    p_second_last: f64,
) -> Result<Vec<f64>> {
    let source = vec![0.0; r.len()];
    numerov_backward(r, g, &source, p_last, p_second_last)
}
