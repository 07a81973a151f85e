/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Expansion of the tabulated starting potential to mesh resolution
//!
//! The input deck carries a 110-point table of -r·V(r)/(2Z) on a grid four
//! times coarser than the 441-point standard mesh. Each table interval is
//! filled with three interpolated points. Beyond point 441 the potential is
//! continued with its asymptotic value (ionicity + 1)/Z.

use serde::Serialize;

use super::errors::{PotentialError, Result};

/// Number of values in the tabulated input potential
pub const INPUT_TABLE_POINTS: usize = 110;

/// Length of the table after expansion, before any asymptotic tail
pub const EXPANDED_TABLE_POINTS: usize = 4 * INPUT_TABLE_POINTS + 1;

/// Source points per block of the coarse table
const TABLE_POINTS_PER_BLOCK: usize = 10;

/// Format of the starting potential, selected by the deck's KEY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PotentialFormat {
    /// KEY = 0: a single 110-point table
    TenTen,
    /// Any other KEY; recognised but not implemented
    Unsupported(i32),
}

impl PotentialFormat {
    pub fn from_key(key: i32) -> Self {
        match key {
            0 => PotentialFormat::TenTen,
            other => PotentialFormat::Unsupported(other),
        }
    }
}

/// Interpolation weights (w0, w1, w2, denominator) for the three fill points
type FillWeights = [(f64, f64, f64, f64); 3];

const INTERIOR_WEIGHTS: FillWeights = [
    (21.0, 14.0, -3.0, 32.0),
    (3.0, 6.0, -1.0, 8.0),
    (5.0, 30.0, -3.0, 32.0),
];

// The interval that crosses into the next block, where the source step doubles
const BOUNDARY_WEIGHTS: FillWeights = [
    (22.0, 11.0, -1.0, 32.0),
    (10.0, 15.0, -1.0, 24.0),
    (6.0, 27.0, -1.0, 32.0),
];

/// Expand a 110-point table to an r·V(r) array of `mesh_len` points
///
/// # Arguments
///
/// * `format` - Table format; only [`PotentialFormat::TenTen`] is accepted
/// * `table` - The 110 tabulated values of -r·V(r)/(2Z)
/// * `z` - Atomic number
/// * `ionicity` - Net charge of the atom
/// * `mesh_len` - Length of the radial mesh
///
/// # Returns
///
/// r·V(r) in Rydberg·bohr at every mesh point
pub fn expand_input_potential(
    format: PotentialFormat,
    table: &[f64],
    z: f64,
    ionicity: f64,
    mesh_len: usize,
) -> Result<Vec<f64>> {
    if let PotentialFormat::Unsupported(key) = format {
        return Err(PotentialError::UnsupportedPotentialFormat(key));
    }

    if table.len() != INPUT_TABLE_POINTS {
        return Err(PotentialError::InvalidPotentialTable(table.len()));
    }

    let last = table[INPUT_TABLE_POINTS - 1];
    let mut padded = table.to_vec();
    padded.extend_from_slice(&[last, last]);

    let mut expanded = Vec::with_capacity(mesh_len.max(EXPANDED_TABLE_POINTS));
    for i in 0..INPUT_TABLE_POINTS {
        let weights = if (i + 1) % TABLE_POINTS_PER_BLOCK == 0 {
            &BOUNDARY_WEIGHTS
        } else {
            &INTERIOR_WEIGHTS
        };

        let (t0, t1, t2) = (padded[i], padded[i + 1], padded[i + 2]);
        expanded.push(t0);
        expanded.extend(
            weights
                .iter()
                .map(|&(w0, w1, w2, d)| (w0 * t0 + w1 * t1 + w2 * t2) / d),
        );
    }
    expanded.push(last);

    let tail = (ionicity + 1.0) / z;
    if mesh_len > expanded.len() {
        expanded.resize(mesh_len, tail);
    } else {
        expanded.truncate(mesh_len);
    }

    Ok(expanded.into_iter().map(|t| -2.0 * z * t).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn screening_table() -> Vec<f64> {
        (0..INPUT_TABLE_POINTS)
            .map(|i| 1.0 - 0.9 * (i as f64 / (INPUT_TABLE_POINTS - 1) as f64))
            .collect()
    }

    #[test]
    fn test_expansion_length_and_endpoints() {
        let table = screening_table();
        let z = 6.0;

        let rv = expand_input_potential(PotentialFormat::TenTen, &table, z, 0.0, 441).unwrap();
        assert_eq!(rv.len(), 441);
        assert_relative_eq!(rv[0], -2.0 * z * table[0]);
        assert_relative_eq!(rv[440], -2.0 * z * table[109]);
        // Table points land on every fourth mesh point
        assert_relative_eq!(rv[4 * 37], -2.0 * z * table[37]);
    }

    #[test]
    fn test_expansion_tail() {
        let table = screening_table();
        let z = 10.0;
        let ionicity = 1.0;

        let rv =
            expand_input_potential(PotentialFormat::TenTen, &table, z, ionicity, 521).unwrap();
        assert_eq!(rv.len(), 521);
        assert_relative_eq!(rv[441], -2.0 * (ionicity + 1.0));
        assert_relative_eq!(rv[520], -2.0 * (ionicity + 1.0));
    }

    #[test]
    fn test_interpolation_reproduces_linear_table_inside_block() {
        let table: Vec<f64> = (0..INPUT_TABLE_POINTS).map(|i| i as f64).collect();
        let rv = expand_input_potential(PotentialFormat::TenTen, &table, 0.5, 0.0, 441).unwrap();

        // -2z = -1, so rv is minus the interpolated table
        assert_relative_eq!(rv[1], -0.25, epsilon = 1e-12);
        assert_relative_eq!(rv[2], -0.5, epsilon = 1e-12);
        assert_relative_eq!(rv[3], -0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_unsupported_format() {
        let table = screening_table();
        assert_eq!(PotentialFormat::from_key(0), PotentialFormat::TenTen);
        assert_eq!(
            expand_input_potential(PotentialFormat::from_key(1), &table, 1.0, 0.0, 441),
            Err(PotentialError::UnsupportedPotentialFormat(1))
        );
        assert_eq!(
            expand_input_potential(PotentialFormat::TenTen, &table[..100], 1.0, 0.0, 441),
            Err(PotentialError::InvalidPotentialTable(100))
        );
    }
}
