/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Radial potential in both r·V(r) and V(r) form

use serde::Serialize;

use super::errors::{PotentialError, Result};
use super::mesh::RadialMesh;

/// Potential on a radial mesh in Rydberg units
///
/// `rv` is the Herman-Skillman quantity r·V(r), which is finite at the origin
/// (-2Z). `v` is V(r) = r·V(r)/r, with the origin holding the raw r·V value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialPotential {
    rv: Vec<f64>,
    v: Vec<f64>,
}

impl RadialPotential {
    /// Create a potential from r·V(r) values aligned with `mesh`
    pub fn new(mesh: &RadialMesh, rv: Vec<f64>) -> Result<Self> {
        if rv.len() != mesh.len() {
            return Err(PotentialError::InvalidMesh(format!(
                "potential has {} points but the mesh has {}",
                rv.len(),
                mesh.len()
            )));
        }

        let v = rv
            .iter()
            .zip(mesh.radii())
            .enumerate()
            .map(|(i, (&u, &r))| if i == 0 { u } else { u / r })
            .collect();

        Ok(Self { rv, v })
    }

    /// Pure Coulomb potential V(r) = -2Z/r
    pub fn coulomb(mesh: &RadialMesh, z: f64) -> Result<Self> {
        Self::new(mesh, vec![-2.0 * z; mesh.len()])
    }

    /// r·V(r)
    pub fn rv(&self) -> &[f64] {
        &self.rv
    }

    /// V(r)
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    pub fn len(&self) -> usize {
        self.rv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rv.is_empty()
    }

    pub fn into_rv(self) -> Vec<f64> {
        self.rv
    }
}
