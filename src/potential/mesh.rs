/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Piecewise-geometric radial mesh
//!
//! The mesh is built in the dimensionless coordinate x: block k holds
//! `points_per_block` points spaced `δx₀·2ᵏ` apart. Radii are x scaled by the
//! per-atom constant ½(3π/4)^{2/3}·Z^{-1/3}.
//!
//! Index 0 is the origin. Block k covers the closed index range
//! `k·N ..= (k+1)·N`, so the last point of one block is the first point of the
//! next one.

use serde::Serialize;

use super::errors::{PotentialError, Result};
use crate::utils::constants::{mesh_scalar, INITIAL_MESH_STEP, POINTS_PER_BLOCK};

/// Parameters that fully determine a radial mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshParameters {
    /// Number of blocks
    pub blocks: usize,
    /// Points appended per block
    pub points_per_block: usize,
    /// Step in x for block 0
    pub initial_step: f64,
    /// Scale from x to radius (bohr)
    pub scalar: f64,
}

impl MeshParameters {
    /// Standard Herman-Skillman mesh for atomic number `z` with `mesh_count` points
    pub fn for_atom(z: f64, mesh_count: usize) -> Result<Self> {
        if z <= 0.0 {
            return Err(PotentialError::InvalidMesh(format!(
                "atomic number must be positive, got {}",
                z
            )));
        }

        if mesh_count < POINTS_PER_BLOCK + 1 || (mesh_count - 1) % POINTS_PER_BLOCK != 0 {
            return Err(PotentialError::InvalidMesh(format!(
                "mesh point count {} is not of the form {}·k + 1",
                mesh_count, POINTS_PER_BLOCK
            )));
        }

        Ok(Self {
            blocks: (mesh_count - 1) / POINTS_PER_BLOCK,
            points_per_block: POINTS_PER_BLOCK,
            initial_step: INITIAL_MESH_STEP,
            scalar: mesh_scalar(z),
        })
    }

    /// Total number of mesh points
    pub fn len(&self) -> usize {
        self.points_per_block * self.blocks + 1
    }

    pub fn is_empty(&self) -> bool {
        self.blocks == 0
    }
}

/// Immutable radial mesh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialMesh {
    parameters: MeshParameters,
    radii: Vec<f64>,
}

impl RadialMesh {
    /// Build the mesh: accumulate x with doubling steps, then scale to radii
    pub fn build(parameters: MeshParameters) -> Result<Self> {
        if parameters.blocks == 0 || parameters.points_per_block < 2 {
            return Err(PotentialError::InvalidMesh(
                "mesh needs at least one block of two points".to_string(),
            ));
        }
        if parameters.initial_step <= 0.0 || parameters.scalar <= 0.0 {
            return Err(PotentialError::InvalidMesh(
                "mesh step and scalar must be positive".to_string(),
            ));
        }

        let mut x = Vec::with_capacity(parameters.len());
        x.push(0.0);

        let mut current = 0.0;
        for block in 0..parameters.blocks {
            let step = parameters.initial_step * 2f64.powi(block as i32);
            for _ in 0..parameters.points_per_block {
                current += step;
                x.push(current);
            }
        }

        let radii = x.into_iter().map(|xi| xi * parameters.scalar).collect();

        Ok(Self { parameters, radii })
    }

    /// Convenience constructor for the standard mesh of an atom
    pub fn for_atom(z: f64, mesh_count: usize) -> Result<Self> {
        Self::build(MeshParameters::for_atom(z, mesh_count)?)
    }

    pub fn parameters(&self) -> &MeshParameters {
        &self.parameters
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Radius at mesh index `i`
    pub fn r(&self, i: usize) -> f64 {
        self.radii[i]
    }

    pub fn points_per_block(&self) -> usize {
        self.parameters.points_per_block
    }

    pub fn blocks(&self) -> usize {
        self.parameters.blocks
    }

    /// Block containing index `i`; block starts belong to the previous block
    pub fn block_of(&self, i: usize) -> usize {
        if i == 0 {
            0
        } else {
            (i - 1) / self.parameters.points_per_block
        }
    }

    /// Closed index range covered by `block`
    pub fn block_range(&self, block: usize) -> std::ops::RangeInclusive<usize> {
        let n = self.parameters.points_per_block;
        block * n..=(block + 1) * n
    }

    /// True when `i` is an interior block boundary, where the step doubles
    pub fn is_block_start(&self, i: usize) -> bool {
        let n = self.parameters.points_per_block;
        i > 0 && i % n == 0 && i < self.len() - 1
    }

    /// Mesh index whose radius is closest to `radius`
    pub fn nearest_index(&self, radius: f64) -> usize {
        match self
            .radii
            .binary_search_by(|r| r.total_cmp(&radius))
        {
            Ok(i) => i,
            Err(0) => 0,
            Err(i) if i >= self.radii.len() => self.radii.len() - 1,
            Err(i) => {
                if radius - self.radii[i - 1] <= self.radii[i] - radius {
                    i - 1
                } else {
                    i
                }
            }
        }
    }

    /// Neighbors of `i` that are equally spaced around it
    ///
    /// At a block boundary the step to the right is twice the step to the left,
    /// so the left neighbor is taken two points back.
    pub fn symmetric_neighbors(&self, i: usize) -> (usize, usize) {
        if self.is_block_start(i) && i >= 2 {
            (i - 2, i + 1)
        } else {
            (i.saturating_sub(1), i + 1)
        }
    }
}
