/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Unit conversion utilities

use super::constants;

/// Convert from Bohr radii to Angstroms
pub fn bohr_to_angstrom(bohr: f64) -> f64 {
    bohr * constants::BOHR_RADIUS
}

/// Convert energy from Rydberg to eV
pub fn rydberg_to_ev(rydberg: f64) -> f64 {
    rydberg * constants::RYDBERG
}

/// Convert energy from Rydberg to Hartree
pub fn rydberg_to_hartree(rydberg: f64) -> f64 {
    rydberg * constants::RYDBERG_TO_HARTREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions() {
        assert_relative_eq!(bohr_to_angstrom(1.0), 0.529177, epsilon = 1e-10);

        // Hydrogen 1s: -1 Ry = -0.5 Ha = -13.6057 eV
        assert_relative_eq!(rydberg_to_hartree(-1.0), -0.5, epsilon = 1e-12);
        assert_relative_eq!(rydberg_to_ev(-1.0), -13.6057, epsilon = 1e-10);
    }
}
