/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Physical and numerical constants used in Herman-Skillman calculations

use std::f64::consts::PI;

/// Bohr radius in Angstroms
pub const BOHR_RADIUS: f64 = 0.529177;

/// Rydberg energy in eV
pub const RYDBERG: f64 = 13.6057;

/// Conversion from Rydberg to Hartree
pub const RYDBERG_TO_HARTREE: f64 = 0.5;

/// Denominator of the Slater exchange term, 32π²
pub const SLATER_EXCHANGE_DENOMINATOR: f64 = 32.0 * PI * PI;

/// Number of mesh points in each block of the radial mesh
pub const POINTS_PER_BLOCK: usize = 40;

/// Step in the x coordinate for the first mesh block
pub const INITIAL_MESH_STEP: f64 = 0.0025;

/// Mesh scalar prefactor ½(3π/4)^{2/3}; multiplied by Z^{-1/3}
pub fn mesh_scalar(z: f64) -> f64 {
    0.5 * (3.0 * PI / 4.0).powf(2.0 / 3.0) * z.powf(-1.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mesh_scalar_hydrogen() {
        // The classic Herman-Skillman value 0.88534 for Z = 1
        assert_relative_eq!(mesh_scalar(1.0), 0.885_34, epsilon = 1e-5);
        assert_relative_eq!(mesh_scalar(8.0), mesh_scalar(1.0) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exchange_denominator() {
        assert_relative_eq!(SLATER_EXCHANGE_DENOMINATOR, 315.827_34, epsilon = 1e-4);
    }
}
