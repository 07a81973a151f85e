/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors that can occur in the utils module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    /// Input arrays of an integrator or quadrature rule have unequal lengths
    #[error("Dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Integration bounds do not address a valid part of the mesh
    #[error("Invalid index range {lo}..={hi} for an array of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    /// Too few points to run the requested numerical method
    #[error("Numerical method needs at least {required} points, found {found}")]
    TooFewPoints { required: usize, found: usize },
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, UtilsError>;
