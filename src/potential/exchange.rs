/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Slater Xα exchange in the radial charge-density form

use std::f64::consts::PI;

use crate::utils::constants::SLATER_EXCHANGE_DENOMINATOR;

/// Slater exchange with a scaling parameter α
///
/// α = 1 is Slater's original average; Kohn-Sham-Gaspar exchange is α = 2/3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlaterExchange {
    pub alpha: f64,
}

impl SlaterExchange {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// r·V_x(r) in Rydberg·bohr from the radial charge density σ(r) = 4πr²ρ(r)
    ///
    /// r·V_x = -6α·[3·r·σ(r)/(32π²)]^{1/3}
    pub fn rv(&self, r: f64, sigma: f64) -> f64 {
        let argument = 3.0 * r * sigma / SLATER_EXCHANGE_DENOMINATOR;
        if argument <= 0.0 {
            return 0.0;
        }
        -6.0 * self.alpha * argument.cbrt()
    }

    /// V_x(ρ) in Rydberg from the electron density ρ in electrons/bohr³
    ///
    /// V_x = -6α·(3ρ/8π)^{1/3}
    pub fn potential(&self, density: f64) -> f64 {
        if density <= 0.0 {
            return 0.0;
        }
        -6.0 * self.alpha * (3.0 * density / (8.0 * PI)).cbrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radial_form_matches_density_form() {
        let exchange = SlaterExchange::new(0.7);
        let r = 1.3;
        let rho = 0.042;
        let sigma = 4.0 * PI * r * r * rho;

        assert_relative_eq!(
            exchange.rv(r, sigma),
            r * exchange.potential(rho),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_empty_density() {
        let exchange = SlaterExchange::new(1.0);
        assert_eq!(exchange.rv(0.0, 5.0), 0.0);
        assert_eq!(exchange.rv(2.0, 0.0), 0.0);
        assert_eq!(exchange.potential(0.0), 0.0);
    }
}
