/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Radial wavefunction storage for the shooting solver
//!
//! Outward and inward integrations are produced one mesh block at a time.
//! Each block's values live in a [`Segment`]; a [`SegmentArena`] owns the
//! segments of one integration direction for the duration of a single shot.
//! [`WavefunctionStore`] pairs both directions with the matching data needed
//! to splice them into one normalized [`RadialWavefunction`].

use serde::Serialize;

use super::electron_config::OrbitalConfig;
use super::errors::Result;
use super::mesh::RadialMesh;
use crate::utils::quadrature::integrate_mesh;

/// Contiguous wavefunction values computed within one mesh block
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Mesh block the values were integrated in
    pub block: usize,
    /// Mesh index of `values[0]`
    pub start: usize,
    pub values: Vec<f64>,
}

impl Segment {
    pub fn new(block: usize, start: usize, values: Vec<f64>) -> Self {
        Self {
            block,
            start,
            values,
        }
    }

    /// Last mesh index covered (inclusive)
    pub fn end(&self) -> usize {
        self.start + self.values.len().saturating_sub(1)
    }

    pub fn contains(&self, index: usize) -> bool {
        !self.values.is_empty() && index >= self.start && index <= self.end()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        if self.contains(index) {
            Some(self.values[index - self.start])
        } else {
            None
        }
    }
}

/// Block-indexed collection of non-overlapping segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentArena {
    segments: Vec<Segment>,
}

impl SegmentArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Segment integrated in `block`
    pub fn block(&self, block: usize) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.block == block)
    }

    /// Value at mesh index `index`, if any segment covers it
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.segments.iter().find_map(|segment| segment.get(index))
    }

    /// Lowest and highest mesh index covered
    pub fn span(&self) -> Option<(usize, usize)> {
        let lo = self.segments.iter().map(|s| s.start).min()?;
        let hi = self.segments.iter().map(Segment::end).max()?;
        Some((lo, hi))
    }

    /// Values laid out on a mesh of `len` points, zero where no segment reaches
    pub fn to_dense(&self, len: usize) -> Vec<f64> {
        let mut dense = vec![0.0; len];
        for segment in &self.segments {
            for (offset, &value) in segment.values.iter().enumerate() {
                if let Some(slot) = dense.get_mut(segment.start + offset) {
                    *slot = value;
                }
            }
        }
        dense
    }
}

/// Outward and inward solutions of one shot plus their matching data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WavefunctionStore {
    pub outward: SegmentArena,
    pub inward: SegmentArena,
    /// 1/sqrt(∫P²_out/P_out(m)² + ∫P²_in/P_in(m)²)
    pub normalization: f64,
    /// Outward solution at the matching index
    pub outward_match: f64,
    /// Inward solution at the matching index
    pub inward_match: f64,
}

impl WavefunctionStore {
    pub fn clear(&mut self) {
        self.outward.clear();
        self.inward.clear();
        self.normalization = 0.0;
        self.outward_match = 0.0;
        self.inward_match = 0.0;
    }

    /// Join both solutions into one normalized P(r) on `0..=outer`
    ///
    /// The outward solution supplies `0..=matching` and the inward solution
    /// `matching+1..=outer`; each is scaled so that both take the value
    /// `normalization` at the matching index. The sign is fixed so that P is
    /// positive just outside the origin.
    pub fn splice_normalized(&self, matching: usize, outer: usize) -> Vec<f64> {
        let outward_scale = self.normalization / self.outward_match;
        let inward_scale = self.normalization / self.inward_match;

        let mut values: Vec<f64> = (0..=outer)
            .map(|i| {
                if i <= matching {
                    self.outward.value_at(i).unwrap_or(0.0) * outward_scale
                } else {
                    self.inward.value_at(i).unwrap_or(0.0) * inward_scale
                }
            })
            .collect();

        if values.get(1).is_some_and(|&p| p < 0.0) {
            values.iter_mut().for_each(|p| *p = -*p);
        }

        values
    }
}

/// Number of sign changes between consecutive values in `values[..=upto + 1]`
pub fn count_nodes(values: &[f64], upto: usize) -> usize {
    let end = (upto + 2).min(values.len());
    values[..end]
        .windows(2)
        .filter(|pair| pair[0] * pair[1] < 0.0)
        .count()
}

/// A converged radial wavefunction P(r) = r·ψ(r)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialWavefunction {
    /// Principal quantum number
    pub n: u32,
    /// Angular momentum quantum number
    pub l: u32,
    /// Magnetic quantum number (label only)
    pub m: u32,
    /// Electrons in the orbital
    pub occupation: f64,
    /// Orbital energy in Rydberg
    pub energy: f64,
    /// P(r) on mesh indices `0..=outer_index`
    pub values: Vec<f64>,
    /// Matching radius index
    pub matching_index: usize,
    /// Outer radius index
    pub outer_index: usize,
    /// Nodes of the node-matched outward solution
    pub nodes: usize,
    /// Iterations of the energy threshold loop
    pub thresh_iterations: usize,
    /// Whether the threshold criterion was met
    pub converged: bool,
}

impl RadialWavefunction {
    pub fn config(&self) -> OrbitalConfig {
        OrbitalConfig {
            n: self.n,
            l: self.l,
            m: self.m,
            occupation: self.occupation,
            trial_energy: self.energy,
        }
    }

    pub fn label(&self) -> String {
        format!("{}{}{}", self.n, self.l, self.m)
    }

    /// ∫P(r)² dr over the orbital's support
    pub fn norm(&self, mesh: &RadialMesh) -> Result<f64> {
        let r = &mesh.radii()[..self.values.len()];
        let p_squared: Vec<f64> = self.values.iter().map(|p| p * p).collect();
        Ok(integrate_mesh(r, &p_squared, 0, self.values.len() - 1)?)
    }

    /// Add occupation·P(r)² to a radial charge density
    pub fn accumulate_density(&self, sigma: &mut [f64]) {
        for (s, p) in sigma.iter_mut().zip(&self.values) {
            *s += self.occupation * p * p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arena_lookup() {
        let mut arena = SegmentArena::new();
        arena.push(Segment::new(0, 0, vec![0.0, 1.0, 2.0]));
        arena.push(Segment::new(1, 3, vec![3.0, 4.0]));

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.value_at(4), Some(4.0));
        assert_eq!(arena.value_at(5), None);
        assert_eq!(arena.block(1).map(Segment::end), Some(4));
        assert_eq!(arena.span(), Some((0, 4)));
        assert_eq!(arena.to_dense(6), vec![0.0, 1.0, 2.0, 3.0, 4.0, 0.0]);

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.span(), None);
    }

    #[test]
    fn test_node_count() {
        let values = [0.0, 1.0, -1.0, -2.0, 3.0, 4.0, -1.0];
        assert_eq!(count_nodes(&values, 0), 0);
        assert_eq!(count_nodes(&values, 1), 1);
        assert_eq!(count_nodes(&values, 3), 2);
        assert_eq!(count_nodes(&values, 10), 3);
    }

    #[test]
    fn test_splice_normalized() {
        let mut store = WavefunctionStore::default();
        store.outward.push(Segment::new(0, 0, vec![0.0, -1.0, -2.0, -4.0]));
        store.inward.push(Segment::new(0, 2, vec![8.0, 4.0, 2.0, 1.0]));
        store.normalization = 0.5;
        store.outward_match = -2.0;
        store.inward_match = 8.0;

        let spliced = store.splice_normalized(2, 4);
        assert_eq!(spliced.len(), 5);
        assert_relative_eq!(spliced[1], 0.25);
        assert_relative_eq!(spliced[2], 0.5);
        assert_relative_eq!(spliced[3], 0.25);
        assert_relative_eq!(spliced[4], 0.125);
    }

    #[test]
    fn test_density_accumulation() {
        let wavefunction = RadialWavefunction {
            n: 1,
            l: 0,
            m: 0,
            occupation: 2.0,
            energy: -1.0,
            values: vec![0.0, 0.5, 1.0],
            matching_index: 1,
            outer_index: 2,
            nodes: 0,
            thresh_iterations: 1,
            converged: true,
        };

        let mut sigma = vec![1.0; 4];
        wavefunction.accumulate_density(&mut sigma);
        assert_eq!(sigma, vec![1.0, 1.5, 3.0, 1.0]);
        assert_eq!(wavefunction.label(), "100");
    }
}
