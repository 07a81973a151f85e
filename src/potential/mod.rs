/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Potential and wavefunction module
//!
//! This module holds the numerical core of the Herman-Skillman calculation:
//! the radial mesh, the expansion of the tabulated starting potential, the
//! Numerov shooting solver for bound orbitals and the self-consistency cycle
//! that rebuilds the Hartree-Fock-Slater potential from the charge density.

pub mod atom_solver;
pub mod electron_config;
mod errors;
pub mod exchange;
pub mod input_potential;
pub mod kinetic;
pub mod mesh;
pub mod numerov;
pub mod radial_potential;
pub mod radial_wavefunction;
pub mod scf;

pub use atom_solver::{EnergyBracket, ShootingSolver, ShotOutcome, SolverCriteria};
pub use electron_config::{OrbitalConfig, ShellType};
pub use errors::{ConvergenceWarning, PotentialError, Result};
pub use exchange::SlaterExchange;
pub use input_potential::{expand_input_potential, PotentialFormat};
pub use kinetic::{build_kinetic_term, KineticTerm, MatchIndices};
pub use mesh::{MeshParameters, RadialMesh};
pub use radial_potential::RadialPotential;
pub use radial_wavefunction::RadialWavefunction;
pub use scf::{ChargeDensity, IonParameters, ScfConfig, ScfDriver, ScfResult};
