/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Electron configuration entries for atomic calculations

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{PotentialError, Result};

/// Shell type in spectroscopic notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellType {
    S, // l=0
    P, // l=1
    D, // l=2
    F, // l=3
    G, // l=4
}

impl ShellType {
    /// Shell for an angular momentum quantum number, if it has a letter
    pub fn from_l(l: u32) -> Option<Self> {
        match l {
            0 => Some(ShellType::S),
            1 => Some(ShellType::P),
            2 => Some(ShellType::D),
            3 => Some(ShellType::F),
            4 => Some(ShellType::G),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            ShellType::S => 's',
            ShellType::P => 'p',
            ShellType::D => 'd',
            ShellType::F => 'f',
            ShellType::G => 'g',
        }
    }
}

/// One orbital of the electron configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalConfig {
    /// Principal quantum number
    pub n: u32,
    /// Angular momentum quantum number
    pub l: u32,
    /// Magnetic quantum number; only used for labeling
    pub m: u32,
    /// Number of electrons in the orbital
    pub occupation: f64,
    /// Starting energy for the eigenvalue search in Rydberg (must be negative)
    pub trial_energy: f64,
}

impl OrbitalConfig {
    pub fn new(n: u32, l: u32, m: u32, occupation: f64, trial_energy: f64) -> Result<Self> {
        let orbital = Self {
            n,
            l,
            m,
            occupation,
            trial_energy,
        };
        orbital.validate()?;
        Ok(orbital)
    }

    /// Check quantum numbers, occupation and trial energy
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 || self.l >= self.n {
            return Err(PotentialError::InvalidOrbital(format!(
                "invalid quantum numbers n={}, l={}",
                self.n, self.l
            )));
        }

        let capacity = self.capacity();
        if !(0.0..=capacity).contains(&self.occupation) {
            return Err(PotentialError::InvalidOrbital(format!(
                "orbital {} holds at most {} electrons, got {}",
                self.label(),
                capacity,
                self.occupation
            )));
        }

        if self.trial_energy.is_nan() || self.trial_energy >= 0.0 {
            return Err(PotentialError::InvalidOrbital(format!(
                "orbital {} needs a negative trial energy, got {}",
                self.label(),
                self.trial_energy
            )));
        }

        Ok(())
    }

    /// Number of radial nodes of the bound state, n - l - 1
    pub fn required_nodes(&self) -> usize {
        (self.n - self.l - 1) as usize
    }

    /// Maximum occupation 2(2l+1)
    pub fn capacity(&self) -> f64 {
        2.0 * (2 * self.l + 1) as f64
    }

    /// Deck-style label formed by the digits of n, l and m, e.g. "210"
    pub fn label(&self) -> String {
        format!("{}{}{}", self.n, self.l, self.m)
    }

    /// Spectroscopic label such as "2p"
    pub fn spectroscopic_label(&self) -> String {
        match ShellType::from_l(self.l) {
            Some(shell) => format!("{}{}", self.n, shell.letter()),
            None => format!("{}(l={})", self.n, self.l),
        }
    }
}

impl fmt::Display for OrbitalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} e)", self.spectroscopic_label(), self.occupation)
    }
}
