/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Utility functions for Herman-Skillman calculations
//!
//! This module provides the constants, unit conversions and the quadrature
//! kernel shared by the mesh, solver and SCF code.

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod quadrature;

pub use conversions::{bohr_to_angstrom, rydberg_to_ev, rydberg_to_hartree};
pub use errors::{Result, UtilsError};
pub use quadrature::{
    grid_log_derivative, integrate_mesh, newton_cotes_three_point, newton_cotes_two_point,
};
