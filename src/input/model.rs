/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Input deck model representation

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::errors::{InputError, Result};
use crate::potential::input_potential::INPUT_TABLE_POINTS;
use crate::potential::{IonParameters, OrbitalConfig, PotentialFormat};

/// Values per line when writing the potential table
const TABLE_VALUES_PER_LINE: usize = 10;

/// Everything read from one input deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomInput {
    /// Atom name from the line after CONT
    pub name: String,
    /// Atomic number
    pub z: f64,
    /// Potential table format key (KEY)
    pub potential_key: i32,
    /// SCF convergence criterion on the change of r·V(r) (TOL)
    pub beta_criterion: f64,
    /// Orbital energy threshold criterion (THRESH)
    pub thresh_criterion: f64,
    /// Mesh point count (MESH)
    pub mesh_count: usize,
    /// Maximum SCF iterations (MAXIT)
    pub max_iterations: usize,
    /// Ionic radius (RADION)
    pub ionic_radius: f64,
    /// Branching ratio (RATIO)
    pub branching_ratio: f64,
    /// Exchange scaling α (ALPHA)
    pub exchange_alpha: f64,
    /// Net ionic charge (XION)
    pub ionicity: f64,
    /// Number of core orbitals (NCORES)
    pub core_shells: usize,
    /// Number of valence orbitals (NVALES)
    pub valence_shells: usize,
    /// The 110 tabulated values of -r·V(r)/(2Z)
    pub potential_table: Vec<f64>,
    /// Core orbitals first, then valence orbitals
    pub orbitals: Vec<OrbitalConfig>,
}

impl AtomInput {
    /// Check the deck for consistency
    pub fn validate(&self) -> Result<()> {
        if self.z <= 0.0 {
            return Err(InputError::InvalidValue(format!(
                "atomic number must be positive, got {}",
                self.z
            )));
        }

        if self.mesh_count < 41 || (self.mesh_count - 1) % 40 != 0 {
            return Err(InputError::InvalidValue(format!(
                "mesh point count must be 40k + 1, got {}",
                self.mesh_count
            )));
        }

        if self.potential_table.len() != INPUT_TABLE_POINTS {
            return Err(InputError::InvalidValue(format!(
                "potential table must hold {} values, found {}",
                INPUT_TABLE_POINTS,
                self.potential_table.len()
            )));
        }

        if self.orbitals.len() != self.core_shells + self.valence_shells {
            return Err(InputError::InvalidValue(format!(
                "expected {} orbitals, found {}",
                self.core_shells + self.valence_shells,
                self.orbitals.len()
            )));
        }

        if self.max_iterations == 0 {
            return Err(InputError::InvalidValue(
                "MAXIT must be positive".to_string(),
            ));
        }

        for orbital in &self.orbitals {
            orbital
                .validate()
                .map_err(|e| InputError::InvalidValue(e.to_string()))?;
        }

        Ok(())
    }

    pub fn potential_format(&self) -> PotentialFormat {
        PotentialFormat::from_key(self.potential_key)
    }

    pub fn ion_parameters(&self) -> IonParameters {
        IonParameters {
            ionicity: self.ionicity,
            ionic_radius: self.ionic_radius,
            branching_ratio: self.branching_ratio,
        }
    }

    /// Total occupation of all orbitals
    pub fn electron_count(&self) -> f64 {
        self.orbitals.iter().map(|orbital| orbital.occupation).sum()
    }

    /// Write the deck in the layout read by [`super::parser::DeckParser`]
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "CONT")?;
        writeln!(writer, "{}", self.name)?;
        writeln!(
            writer,
            "{} {:e} {:e} {} 0 {} 0 {} {} {}",
            self.potential_key,
            self.beta_criterion,
            self.thresh_criterion,
            self.mesh_count,
            self.max_iterations,
            self.ionic_radius,
            self.branching_ratio,
            self.exchange_alpha
        )?;

        for chunk in self.potential_table.chunks(TABLE_VALUES_PER_LINE) {
            let line: Vec<String> = chunk.iter().map(|value| value.to_string()).collect();
            writeln!(writer, "{}", line.join(" "))?;
        }

        writeln!(
            writer,
            "{} {} {} {}",
            self.z, self.core_shells, self.valence_shells, self.ionicity
        )?;

        for orbital in &self.orbitals {
            writeln!(
                writer,
                "{} {} {}",
                orbital.label(),
                orbital.occupation,
                orbital.trial_energy
            )?;
        }

        Ok(())
    }
}
