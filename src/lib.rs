/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! # hfs-rs
//!
//! Self-consistent Hartree-Fock-Slater atomic structure calculations on the
//! Herman-Skillman radial mesh.
//!
//! The calculation starts from a tabulated 110-point potential, solves the
//! radial Schrödinger equation for every orbital of the configuration with a
//! Numerov shooting method, rebuilds the potential from the resulting charge
//! density with Slater Xα exchange, and iterates to self-consistency.
//!
//! ```no_run
//! use hfs_rs::input::{parse_deck, RunConfig};
//! use hfs_rs::HermanSkillman;
//!
//! let input = parse_deck("argon.dat")?;
//! let result = HermanSkillman::new(RunConfig::default()).run(&input)?;
//! for orbital in &result.orbitals {
//!     println!("{} {:.4}", orbital.label(), orbital.energy);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod input;
pub mod output;
pub mod potential;
pub mod utils;

use anyhow::Context;
use log::debug;

use input::{AtomInput, RunConfig};
use potential::{expand_input_potential, RadialMesh, ScfConfig, ScfDriver, ScfResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// The main entry point for a Herman-Skillman calculation
#[derive(Debug, Clone, Default)]
pub struct HermanSkillman {
    config: RunConfig,
}

impl HermanSkillman {
    /// Create a new calculation instance with the given run configuration
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// SCF settings for `input`, with run configuration overrides applied
    pub fn scf_config(&self, input: &AtomInput) -> ScfConfig {
        ScfConfig {
            z: input.z,
            exchange_alpha: input.exchange_alpha,
            beta_criterion: input.beta_criterion,
            pratt: self.config.pratt,
            max_iterations: self
                .config
                .max_scf_iterations
                .unwrap_or(input.max_iterations),
            core_shells: input.core_shells,
            ion: input.ion_parameters(),
            solver: self.config.solver_criteria(input.thresh_criterion),
        }
    }

    /// Run the calculation for one atom
    pub fn run(&self, input: &AtomInput) -> anyhow::Result<ScfResult> {
        self.config.validate().context("invalid run configuration")?;
        input
            .validate()
            .with_context(|| format!("invalid input deck for {}", input.name))?;

        let mesh = RadialMesh::for_atom(input.z, input.mesh_count)
            .context("failed to build the radial mesh")?;

        let initial_rv = expand_input_potential(
            input.potential_format(),
            &input.potential_table,
            input.z,
            input.ionicity,
            mesh.len(),
        )
        .context("failed to expand the starting potential")?;

        for orbital in &input.orbitals {
            debug!("{} orbital {}", input.name, orbital);
        }

        let driver = ScfDriver::new(self.scf_config(input))?;
        let result = driver
            .run(&mesh, initial_rv, &input.orbitals)
            .with_context(|| format!("SCF calculation failed for {}", input.name))?;

        Ok(result)
    }
}
