/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! End-to-end tests of the self-consistency cycle

use approx::assert_relative_eq;
use hfs_rs::input::{parse_deck, parse_deck_str, AtomInput, RunConfig};
use hfs_rs::output::{json_report, text_report};
use hfs_rs::potential::{ConvergenceWarning, EnergyBracket, OrbitalConfig};
use hfs_rs::HermanSkillman;
use std::path::Path;

/// Deck starting from the bare-nucleus potential
fn bare_nucleus_input(name: &str, z: f64, orbitals: Vec<OrbitalConfig>) -> AtomInput {
    AtomInput {
        name: name.to_string(),
        z,
        potential_key: 0,
        beta_criterion: 1.0e-3,
        thresh_criterion: 1.0e-6,
        mesh_count: 441,
        max_iterations: 100,
        ionic_radius: 0.0,
        branching_ratio: 0.0,
        exchange_alpha: 1.0,
        ionicity: 0.0,
        core_shells: orbitals.len(),
        valence_shells: 0,
        potential_table: vec![1.0; 110],
        orbitals,
    }
}

#[test]
fn test_empty_configuration_is_already_self_consistent() {
    let input = bare_nucleus_input(
        "HYDROGEN",
        1.0,
        vec![OrbitalConfig::new(1, 0, 0, 0.0, -0.8).unwrap()],
    );
    let result = HermanSkillman::default().run(&input).unwrap();

    assert!(result.converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.beta_history, vec![0.0]);
    assert_eq!(result.timings.len(), 1);
    assert!(result.potential.iter().all(|&u| u == -2.0));
    assert_relative_eq!(result.orbitals[0].energy, -1.0, max_relative = 2e-3);
}

#[test]
fn test_helium_ground_state() {
    let input = bare_nucleus_input(
        "HELIUM",
        2.0,
        vec![OrbitalConfig::new(1, 0, 0, 2.0, -3.2).unwrap()],
    );
    let result = HermanSkillman::default().run(&input).unwrap();

    // Screening lifts the 1s level well above the bare-nucleus value of -4 Ry
    let energy = result.orbitals[0].energy;
    assert!(energy > -2.5 && energy < -1.0, "1s energy {}", energy);

    assert_eq!(result.potential[0], -4.0);
    assert_relative_eq!(
        result.density.electron_count(&result.mesh).unwrap(),
        2.0,
        epsilon = 1e-3
    );
    assert_eq!(result.density.valence.iter().sum::<f64>(), 0.0);

    assert_eq!(result.beta_history.len(), result.iterations);
    assert!(result.final_beta < result.beta_history[0]);
}

#[test]
fn test_iteration_cap_keeps_best_effort_result() {
    let input = bare_nucleus_input(
        "HELIUM",
        2.0,
        vec![OrbitalConfig::new(1, 0, 0, 2.0, -3.2).unwrap()],
    );
    let config = RunConfig {
        max_scf_iterations: Some(2),
        ..RunConfig::default()
    };
    let result = HermanSkillman::new(config).run(&input).unwrap();

    assert!(!result.converged);
    assert_eq!(result.iterations, 2);
    assert!(matches!(
        result.warnings.last(),
        Some(ConvergenceWarning::DivergentScf { iterations: 2, .. })
    ));
    assert!(result.orbitals[0].energy < 0.0);
}

#[test]
fn test_reports() {
    let input = bare_nucleus_input(
        "HYDROGEN",
        1.0,
        vec![OrbitalConfig::new(1, 0, 0, 0.0, -0.8).unwrap()],
    );
    let result = HermanSkillman::default().run(&input).unwrap();

    let text = text_report(&input.name, input.z, &result);
    assert!(text.starts_with("HYDROGEN (Z=1)"));
    assert!(text.contains("Modified Herman-Skillman Potential Values r*V(r)"));
    assert!(text.contains("Orbital: 100"));
    assert!(text.contains("SCF converged in 1 iterations"));

    let json: serde_json::Value = serde_json::from_str(&json_report(&result).unwrap()).unwrap();
    assert_eq!(json["iterations"], 1);
    assert_eq!(json["converged"], true);
    assert_eq!(json["orbitals"][0]["n"], 1);
    assert_eq!(json["potential"].as_array().unwrap().len(), 441);
}

#[test]
fn test_helium_demo_deck() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/helium.dat");
    let input = parse_deck(path).unwrap();
    let result = HermanSkillman::default().run(&input).unwrap();

    assert!(result.converged);
    assert!(result.warnings.is_empty());
    assert_relative_eq!(result.orbitals[0].energy, -1.72, max_relative = 5e-3);
    assert_relative_eq!(result.orbitals[0].norm(&result.mesh).unwrap(), 1.0, epsilon = 1e-3);
}

#[test]
fn test_lithium_ion() {
    let mut input = bare_nucleus_input(
        "LITHIUM+",
        3.0,
        vec![OrbitalConfig::new(1, 0, 0, 2.0, -8.0).unwrap()],
    );
    input.ionicity = 1.0;
    input.ionic_radius = 2.0;
    input.branching_ratio = 1.0;

    let engine = HermanSkillman::default();
    let scf = engine.scf_config(&input);
    assert!(scf.ion.is_ion());
    assert_eq!(scf.energy_bracket(), EnergyBracket::ion());
    assert_eq!(scf.energy_bracket().lower, 2.4);

    let result = engine.run(&input).unwrap();
    assert!(result.converged);

    let energy = result.orbitals[0].energy;
    assert!(energy < -2.0 && energy > -9.0, "1s energy {}", energy);
    assert_relative_eq!(
        result.density.electron_count(&result.mesh).unwrap(),
        2.0,
        epsilon = 1e-3
    );

    // Outside the ionic radius the correction lifts the -2 tail of r·V(r) by 2·ionicity·ratio
    let i = result.mesh.nearest_index(5.0);
    assert!(result.potential[i].abs() < 0.5, "r·V(5) = {}", result.potential[i]);
}

/// Neon deck with a screened starting potential
fn neon_deck() -> String {
    let mut deck = String::from(
        "CONT\n\
         NEON\n\
         0 0.0001 0.000001 441 0 40 0 0.0 0.0 1.0\n",
    );
    for row in 0..11 {
        let values: Vec<String> = (0..10)
            .map(|col| {
                let i = (row * 10 + col) as f64;
                format!("{:.6}", 0.1 + 0.9 * (-i / 20.0).exp())
            })
            .collect();
        deck.push_str(&values.join("  "));
        deck.push('\n');
    }
    deck.push_str(
        "10. 2 1 0.0\n\
         100 2.0 -60.0\n\
         200 2.0 -3.0\n\
         210 6.0 -1.7\n",
    );
    deck
}

#[test]
fn test_neon_shell_structure() {
    let input = parse_deck_str(&neon_deck()).unwrap();
    let config = RunConfig {
        max_scf_iterations: Some(100),
        ..RunConfig::default()
    };
    let result = HermanSkillman::new(config).run(&input).unwrap();

    assert!(result.converged);
    let nodes: Vec<usize> = result.orbitals.iter().map(|o| o.nodes).collect();
    assert_eq!(nodes, vec![0, 1, 0]);

    let energies: Vec<f64> = result.orbitals.iter().map(|o| o.energy).collect();
    assert!(energies[0] < energies[1] && energies[1] < energies[2] && energies[2] < 0.0);

    assert_relative_eq!(
        result.density.electron_count(&result.mesh).unwrap(),
        10.0,
        epsilon = 1e-2
    );
    // 2p is valence: NCORES = 2
    assert!(result.density.valence.iter().any(|&s| s > 0.0));
}
