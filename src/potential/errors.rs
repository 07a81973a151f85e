/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Error and warning types for potential calculations

use serde::Serialize;
use thiserror::Error;

/// Result type for potential calculations
pub type Result<T> = std::result::Result<T, PotentialError>;

/// Error type for potential-related operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PotentialError {
    /// A numerical kernel rejected its input (unequal lengths, bad range, too few points)
    #[error("Numerical error: {0}")]
    Numerical(#[from] crate::utils::errors::UtilsError),

    /// Only the 110-point table (KEY = 0) is implemented
    #[error("Unsupported potential format key {0}; only KEY = 0 (110-point table) is implemented")]
    UnsupportedPotentialFormat(i32),

    /// The input potential table has the wrong number of values
    #[error("Input potential table must hold 110 values, found {0}")]
    InvalidPotentialTable(usize),

    /// Mesh parameters or mesh-aligned arrays are inconsistent
    #[error("Invalid radial mesh: {0}")]
    InvalidMesh(String),

    /// Quantum numbers, occupation or trial energy are unusable
    #[error("Invalid orbital: {0}")]
    InvalidOrbital(String),

    /// Invalid SCF parameters such as the Pratt mixing factor
    #[error("Invalid SCF parameter: {0}")]
    InvalidParameter(String),

    /// Failed to calculate potential
    #[error("Potential calculation failed: {0}")]
    CalculationError(String),
}

/// Non-fatal convergence conditions reported alongside best-effort results
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ConvergenceWarning {
    /// Node-count search did not reach the required node count
    #[error("orbital {orbital}: node search stopped after {iterations} iterations with {nodes} nodes (required {required})")]
    NodeSearch {
        orbital: String,
        iterations: usize,
        nodes: usize,
        required: usize,
    },

    /// Energy bisection hit its iteration cap before reaching the bracket tolerance
    #[error("orbital {orbital}: energy bisection stopped after {iterations} iterations, half-width {half_width:.3e}")]
    Bisection {
        orbital: String,
        iterations: usize,
        half_width: f64,
    },

    /// No level of the required symmetry was found near the node-matched energy
    #[error("orbital {orbital}: no eigenvalue found in the energy bracket [{lower:.6}, {upper:.6}] Ry")]
    EmptyBracket {
        orbital: String,
        lower: f64,
        upper: f64,
    },

    /// Threshold loop stopped without meeting its criterion its iteration cap
    #[error("orbital {orbital}: energy threshold not met after {iterations} iterations, |dE/E| = {relative_correction:.3e}")]
    NonConvergence {
        orbital: String,
        iterations: usize,
        relative_correction: f64,
    },

    /// SCF loop exceeded its iteration cap
    #[error("SCF did not converge within {iterations} iterations, beta = {beta:.3e}")]
    DivergentScf { iterations: usize, beta: f64 },
}
