/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Self-consistency cycle for the Hartree-Fock-Slater potential
//!
//! Each iteration solves every orbital in the current potential, builds the
//! radial charge density σ(r) = Σ occ·P(r)², rebuilds r·V(r) from it and
//! damps the update with Pratt mixing. Iteration stops when the largest
//! change β of r·V(r) falls below the criterion.

use log::{info, warn};
use serde::Serialize;
use std::time::Instant;

use super::atom_solver::{EnergyBracket, ShootingSolver, SolverCriteria};
use super::electron_config::OrbitalConfig;
use super::errors::{ConvergenceWarning, PotentialError, Result};
use super::exchange::SlaterExchange;
use super::mesh::RadialMesh;
use super::radial_potential::RadialPotential;
use super::radial_wavefunction::RadialWavefunction;
use crate::utils::quadrature::integrate_mesh;

/// Asymptotic value of r·V(r) for a neutral atom; larger values are clamped to it
const NEUTRAL_TAIL: f64 = -2.0;

/// Ionic charge and the radius inside which it is ramped in
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IonParameters {
    /// Net charge of the atom
    pub ionicity: f64,
    /// Ionic radius in bohr; zero for a neutral treatment
    pub ionic_radius: f64,
    /// Fraction of the ionic charge applied to the potential
    pub branching_ratio: f64,
}

impl IonParameters {
    pub fn is_ion(&self) -> bool {
        self.ionic_radius > 0.0
    }
}

/// Parameters of the self-consistency cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ScfConfig {
    /// Atomic number
    pub z: f64,
    /// Exchange scaling α
    pub exchange_alpha: f64,
    /// Convergence criterion on the maximum change of r·V(r)
    pub beta_criterion: f64,
    /// Pratt mixing factor: weight kept from the previous potential
    pub pratt: f64,
    /// Maximum SCF iterations
    pub max_iterations: usize,
    /// The first `core_shells` orbitals count as core
    pub core_shells: usize,
    pub ion: IonParameters,
    pub solver: SolverCriteria,
}

impl ScfConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.pratt > 0.0 && self.pratt < 1.0) {
            return Err(PotentialError::InvalidParameter(format!(
                "Pratt factor must lie in (0, 1), got {}",
                self.pratt
            )));
        }
        if self.max_iterations == 0 {
            return Err(PotentialError::InvalidParameter(
                "maximum SCF iterations must be positive".to_string(),
            ));
        }
        if self.z <= 0.0 {
            return Err(PotentialError::InvalidParameter(format!(
                "atomic number must be positive, got {}",
                self.z
            )));
        }
        Ok(())
    }

    /// Bisection bracket for the charge state: widened for positive ions
    pub fn energy_bracket(&self) -> EnergyBracket {
        EnergyBracket::for_ionicity(self.ion.ionicity)
    }
}

/// Radial charge density split into core and valence parts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargeDensity {
    pub core: Vec<f64>,
    pub valence: Vec<f64>,
    pub total: Vec<f64>,
}

impl ChargeDensity {
    /// σ(r) = Σ occ·P(r)² over `orbitals`; the first `core_shells` are core
    pub fn accumulate(len: usize, orbitals: &[RadialWavefunction], core_shells: usize) -> Self {
        let mut core = vec![0.0; len];
        let mut valence = vec![0.0; len];

        for (index, orbital) in orbitals.iter().enumerate() {
            if index < core_shells {
                orbital.accumulate_density(&mut core);
            } else {
                orbital.accumulate_density(&mut valence);
            }
        }

        let total = core.iter().zip(&valence).map(|(c, v)| c + v).collect();
        Self {
            core,
            valence,
            total,
        }
    }

    /// ∫σ(r) dr, the number of electrons
    pub fn electron_count(&self, mesh: &RadialMesh) -> Result<f64> {
        Ok(integrate_mesh(
            mesh.radii(),
            &self.total,
            0,
            mesh.len() - 1,
        )?)
    }
}

/// Hartree-Fock-Slater r·V(r) from a radial charge density
///
/// r·V(r) = -2Z + 2∫₀ʳσ(t)dt + 2r∫ᵣ^∞σ(t)/t dt + r·V_x(r)
///
/// Values above the neutral tail -2 are clamped to it and the origin is
/// fixed at -2Z.
pub fn hfs_potential(
    mesh: &RadialMesh,
    sigma: &[f64],
    z: f64,
    exchange: SlaterExchange,
) -> Result<Vec<f64>> {
    let r = mesh.radii();
    let len = r.len();
    if sigma.len() != len {
        return Err(crate::utils::errors::UtilsError::DimensionMismatch {
            expected: len,
            found: sigma.len(),
        }
        .into());
    }

    let sigma_over_r: Vec<f64> = sigma
        .iter()
        .zip(r)
        .map(|(&s, &ri)| if ri > 0.0 { s / ri } else { 0.0 })
        .collect();

    let mut rv = Vec::with_capacity(len);
    for i in 0..len {
        let enclosed = 2.0 * integrate_mesh(r, sigma, 0, i)?;
        let outside = 2.0 * r[i] * integrate_mesh(r, &sigma_over_r, i, len - 1)?;
        let value = -2.0 * z + enclosed + outside + exchange.rv(r[i], sigma[i]);
        rv.push(value.min(NEUTRAL_TAIL));
    }
    rv[0] = -2.0 * z;

    Ok(rv)
}

/// Add the ionic correction: a ramp inside the ionic radius, constant outside
pub fn apply_ionic_correction(mesh: &RadialMesh, rv: &mut [f64], ion: &IonParameters) {
    let charge = ion.ionicity * ion.branching_ratio;
    for (value, &r) in rv.iter_mut().zip(mesh.radii()) {
        if r < ion.ionic_radius {
            *value += 2.0 * charge * r / ion.ionic_radius;
        } else {
            *value += 2.0 * charge;
        }
    }
}

/// β: largest |old - new| over all but the last mesh point
pub fn max_deviation(old: &[f64], new: &[f64]) -> f64 {
    let len = old.len().min(new.len());
    old[..len.saturating_sub(1)]
        .iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Pratt damping: old ← pratt·old + (1 - pratt)·new, last point held fixed
pub fn pratt_mix(old: &mut [f64], new: &[f64], pratt: f64) {
    let len = old.len().min(new.len());
    for (a, &b) in old[..len.saturating_sub(1)].iter_mut().zip(new) {
        *a = pratt * *a + (1.0 - pratt) * b;
    }
}

/// Result of the self-consistency calculation
#[derive(Debug, Clone, Serialize)]
pub struct ScfResult {
    /// Orbitals from the final iteration
    pub orbitals: Vec<RadialWavefunction>,
    /// r·V(r) the final orbitals were computed in
    pub potential: Vec<f64>,
    pub mesh: RadialMesh,
    /// Number of iterations performed
    pub iterations: usize,
    /// Whether convergence was achieved
    pub converged: bool,
    /// Final β
    pub final_beta: f64,
    /// β history
    pub beta_history: Vec<f64>,
    /// Timings for each iteration (in milliseconds)
    pub timings: Vec<u64>,
    /// Charge density of the final orbitals
    pub density: ChargeDensity,
    /// Non-fatal convergence conditions of the final iteration and the SCF loop
    pub warnings: Vec<ConvergenceWarning>,
}

/// Drives the SCF loop for one atom
pub struct ScfDriver {
    config: ScfConfig,
}

impl ScfDriver {
    pub fn new(config: ScfConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScfConfig {
        &self.config
    }

    /// Iterate from `initial_rv` until β falls below the criterion
    pub fn run(
        &self,
        mesh: &RadialMesh,
        initial_rv: Vec<f64>,
        orbitals: &[OrbitalConfig],
    ) -> Result<ScfResult> {
        let config = &self.config;
        if orbitals.is_empty() {
            return Err(PotentialError::InvalidOrbital(
                "electron configuration is empty".to_string(),
            ));
        }

        let exchange = SlaterExchange::new(config.exchange_alpha);
        let bracket = config.energy_bracket();

        let mut input_rv = initial_rv;
        let mut beta_history = Vec::with_capacity(config.max_iterations);
        let mut timings = Vec::with_capacity(config.max_iterations);

        let mut solved = Vec::new();
        let mut warnings = Vec::new();
        let mut density = ChargeDensity::default();
        let mut used_rv = Vec::new();
        let mut converged = false;

        for iteration in 1..=config.max_iterations {
            let start_time = Instant::now();

            let potential = RadialPotential::new(mesh, input_rv.clone())?;
            let solver =
                ShootingSolver::new(mesh, &potential, config.z, config.solver, bracket)?;

            solved.clear();
            warnings.clear();
            for orbital in orbitals {
                let outcome = solver.solve(orbital)?;
                warnings.extend(outcome.warnings);
                solved.push(outcome.wavefunction);
            }

            density = ChargeDensity::accumulate(mesh.len(), &solved, config.core_shells);
            let mut new_rv = hfs_potential(mesh, &density.total, config.z, exchange)?;
            if config.ion.is_ion() {
                apply_ionic_correction(mesh, &mut new_rv, &config.ion);
            }

            let beta = max_deviation(&input_rv, &new_rv);
            beta_history.push(beta);
            info!("SCF iteration {}: beta = {:.6e}", iteration, beta);

            used_rv = potential.into_rv();

            if beta < config.beta_criterion {
                converged = true;
                timings.push(start_time.elapsed().as_millis() as u64);
                break;
            }

            pratt_mix(&mut input_rv, &new_rv, config.pratt);
            timings.push(start_time.elapsed().as_millis() as u64);
        }

        let iterations = beta_history.len();
        let final_beta = beta_history.last().copied().unwrap_or(f64::MAX);

        if converged {
            info!(
                "SCF converged after {} iterations, beta = {:.6e}",
                iterations, final_beta
            );
        } else {
            let warning = ConvergenceWarning::DivergentScf {
                iterations,
                beta: final_beta,
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        Ok(ScfResult {
            orbitals: solved,
            potential: used_rv,
            mesh: mesh.clone(),
            iterations,
            converged,
            final_beta,
            beta_history,
            timings,
            density,
            warnings,
        })
    }
}
