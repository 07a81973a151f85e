/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Kinetic term of the radial equation and the matching/outer radii
//!
//! For P(r) = r·ψ(r) the radial equation reads P'' = -g·P with
//! g(r) = E - V(r) - l(l+1)/r². The matching radius is the classical turning
//! point where g changes from positive to negative; the outer radius bounds
//! the integration domain.

use serde::Serialize;

use super::errors::{PotentialError, Result};
use super::mesh::RadialMesh;
use super::radial_potential::RadialPotential;

/// Smallest gap kept between the matching index and the end of the mesh
const MATCH_MARGIN: usize = 4;

/// Indices that split the integration domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchIndices {
    /// Classical turning point; outward and inward solutions meet here
    pub matching: usize,
    /// Last point of the orbital's support
    pub outer: usize,
}

/// g(r) for one angular momentum and trial energy
#[derive(Debug, Clone, PartialEq)]
pub struct KineticTerm {
    pub values: Vec<f64>,
    pub indices: MatchIndices,
    pub l: u32,
    pub energy: f64,
}

/// Build g(r) and locate the matching and outer radii
pub fn build_kinetic_term(
    potential: &RadialPotential,
    mesh: &RadialMesh,
    l: u32,
    energy: f64,
) -> Result<KineticTerm> {
    let len = mesh.len();
    if potential.len() != len {
        return Err(PotentialError::InvalidMesh(format!(
            "potential has {} points but the mesh has {}",
            potential.len(),
            len
        )));
    }
    if len < 2 * MATCH_MARGIN {
        return Err(PotentialError::InvalidMesh(format!(
            "mesh of {} points is too short for the shooting solver",
            len
        )));
    }

    let centrifugal = (l * (l + 1)) as f64;
    let v = potential.v();

    let mut values = Vec::with_capacity(len);
    // Multiplies P(0) = 0 only
    values.push(v[0] + energy);
    values.extend(
        (1..len).map(|i| {
            let r = mesh.r(i);
            -v[i] - centrifugal / (r * r) + energy
        }),
    );

    let indices = locate_match_indices(&values, mesh, l);

    Ok(KineticTerm {
        values,
        indices,
        l,
        energy,
    })
}

fn locate_match_indices(g: &[f64], mesh: &RadialMesh, l: u32) -> MatchIndices {
    let len = g.len();
    let last_allowed = len - MATCH_MARGIN;

    let matching = (1..len - 1)
        .find(|&i| g[i] > 0.0 && g[i + 1] < 0.0)
        .unwrap_or(last_allowed)
        .min(last_allowed);

    let factor = if l == 0 { 8.0 } else { 5.0 + l as f64 };
    let mut outer = mesh.nearest_index(factor * mesh.r(matching));
    if outer >= len - 1 {
        outer = len - 2;
    }

    MatchIndices {
        matching,
        outer: outer.max(matching + 2),
    }
}
