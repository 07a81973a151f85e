/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

use approx::assert_relative_eq;
use hfs_rs::potential::input_potential::{EXPANDED_TABLE_POINTS, INPUT_TABLE_POINTS};
use hfs_rs::potential::{
    build_kinetic_term, expand_input_potential, PotentialError, PotentialFormat, RadialMesh,
    RadialPotential, SlaterExchange,
};
use hfs_rs::utils::errors::UtilsError;
use rstest::rstest;

/// Test the Herman-Skillman mesh layout
#[rstest]
#[case(1.0, 441)]
#[case(18.0, 441)]
#[case(79.0, 521)]
fn test_mesh_layout(#[case] z: f64, #[case] count: usize) {
    let mesh = RadialMesh::for_atom(z, count).unwrap();
    let r = mesh.radii();

    assert_eq!(mesh.len(), count);
    assert_eq!(r[0], 0.0);
    assert!(r.windows(2).all(|pair| pair[1] > pair[0]));

    // The step doubles across every block boundary
    let n = mesh.points_per_block();
    for block in 1..mesh.blocks() {
        let b = block * n;
        let left = r[b] - r[b - 1];
        let right = r[b + 1] - r[b];
        assert_relative_eq!(right, 2.0 * left, max_relative = 1e-9);
    }

    // r scales as Z^(-1/3)
    let hydrogen = RadialMesh::for_atom(1.0, count).unwrap();
    assert_relative_eq!(r[count - 1] * z.cbrt(), hydrogen.r(count - 1), max_relative = 1e-12);
}

#[test]
fn test_mesh_rejects_bad_counts() {
    assert!(RadialMesh::for_atom(1.0, 440).is_err());
    assert!(RadialMesh::for_atom(1.0, 1).is_err());
    assert!(RadialMesh::for_atom(0.0, 441).is_err());
}

/// Test expansion of the 110-point table onto the mesh
#[test]
fn test_expanded_potential_limits() {
    let z = 18.0;
    let table: Vec<f64> = (0..INPUT_TABLE_POINTS)
        .map(|i| {
            let t = i as f64 / (INPUT_TABLE_POINTS - 1) as f64;
            1.0 - (1.0 - 1.0 / z) * t
        })
        .collect();

    let rv = expand_input_potential(PotentialFormat::TenTen, &table, z, 0.0, 521).unwrap();
    assert_eq!(rv.len(), 521);
    assert_relative_eq!(rv[0], -2.0 * z, epsilon = 1e-12);
    assert_relative_eq!(rv[EXPANDED_TABLE_POINTS - 1], -2.0, epsilon = 1e-12);
    assert_relative_eq!(rv[520], -2.0, epsilon = 1e-12);

    let ion = expand_input_potential(PotentialFormat::TenTen, &table, z, 1.0, 521).unwrap();
    assert_relative_eq!(ion[520], -4.0, epsilon = 1e-12);
}

#[test]
fn test_expansion_errors() {
    let table = vec![1.0; INPUT_TABLE_POINTS];
    assert!(matches!(
        expand_input_potential(PotentialFormat::from_key(2), &table, 1.0, 0.0, 441),
        Err(PotentialError::UnsupportedPotentialFormat(2))
    ));
    assert!(matches!(
        expand_input_potential(PotentialFormat::TenTen, &table[..100], 1.0, 0.0, 441),
        Err(PotentialError::InvalidPotentialTable(100))
    ));
}

/// Test turning-point location in a Coulomb potential
#[rstest]
#[case(0, -1.0, 2.0)]
#[case(0, -0.25, 8.0)]
fn test_matching_radius_at_turning_point(
    #[case] l: u32,
    #[case] energy: f64,
    #[case] turning_point: f64,
) {
    let mesh = RadialMesh::for_atom(1.0, 441).unwrap();
    let potential = RadialPotential::coulomb(&mesh, 1.0).unwrap();
    let kinetic = build_kinetic_term(&potential, &mesh, l, energy).unwrap();

    let matching = kinetic.indices.matching;
    assert!(mesh.r(matching) <= turning_point);
    assert!(mesh.r(matching + 1) >= turning_point);
    assert!(kinetic.indices.outer > matching + 1);
    assert_eq!(kinetic.indices.outer, mesh.nearest_index(8.0 * mesh.r(matching)));
}

#[test]
fn test_exchange_scales_with_alpha() {
    let full = SlaterExchange::new(1.0);
    let ksg = SlaterExchange::new(2.0 / 3.0);
    let (r, sigma) = (0.7, 1.9);

    assert!(full.rv(r, sigma) < 0.0);
    assert_relative_eq!(ksg.rv(r, sigma), 2.0 / 3.0 * full.rv(r, sigma), epsilon = 1e-12);
}

#[test]
fn test_numerical_errors_keep_their_kind() {
    let range = PotentialError::from(UtilsError::InvalidRange { lo: 5, hi: 2, len: 4 });
    assert!(matches!(
        range,
        PotentialError::Numerical(UtilsError::InvalidRange { .. })
    ));
    assert!(range.to_string().contains("Invalid index range"));
    assert!(!range.to_string().contains("Dimension mismatch"));

    let sparse = PotentialError::from(UtilsError::TooFewPoints {
        required: 3,
        found: 1,
    });
    assert!(sparse.to_string().starts_with("Numerical error"));
}
