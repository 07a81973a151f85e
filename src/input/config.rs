/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Parser and run configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::{InputError, Result};
use crate::potential::SolverCriteria;

/// Input deck parser configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Whether to validate the parsed deck (orbitals, mesh count, table length)
    pub validate: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// Numerical settings that are not part of the input deck
///
/// Missing fields in a JSON configuration fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Pratt mixing factor in (0, 1)
    pub pratt: f64,
    /// Maximum passes of the energy threshold loop per orbital
    pub max_thresh_iterations: usize,
    /// Maximum energy rescalings in the node search
    pub max_node_iterations: usize,
    /// Maximum energy bisection steps
    pub max_bisection_iterations: usize,
    /// Bisection bracket half-width tolerance in Rydberg
    pub bisection_tolerance: f64,
    /// Overrides the deck's MAXIT when set
    pub max_scf_iterations: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pratt: 0.75,
            max_thresh_iterations: 21,
            max_node_iterations: 200,
            max_bisection_iterations: 200,
            bisection_tolerance: 1.0e-9,
            max_scf_iterations: None,
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.pratt > 0.0 && self.pratt < 1.0) {
            return Err(InputError::InvalidValue(format!(
                "pratt must lie in (0, 1), got {}",
                self.pratt
            )));
        }
        if self.max_thresh_iterations == 0
            || self.max_node_iterations == 0
            || self.max_bisection_iterations == 0
        {
            return Err(InputError::InvalidValue(
                "iteration limits must be positive".to_string(),
            ));
        }
        if self.bisection_tolerance <= 0.0 {
            return Err(InputError::InvalidValue(format!(
                "bisection_tolerance must be positive, got {}",
                self.bisection_tolerance
            )));
        }
        if self.max_scf_iterations == Some(0) {
            return Err(InputError::InvalidValue(
                "max_scf_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Solver limits combined with the deck's threshold criterion
    pub fn solver_criteria(&self, thresh_criterion: f64) -> SolverCriteria {
        SolverCriteria {
            thresh_criterion,
            max_thresh_iterations: self.max_thresh_iterations,
            max_node_iterations: self.max_node_iterations,
            max_bisection_iterations: self.max_bisection_iterations,
            bisection_tolerance: self.bisection_tolerance,
        }
    }
}
