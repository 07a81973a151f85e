/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Report formatting for SCF results
//!
//! Text reports follow the classic Herman-Skillman listing: an orbital
//! energy table followed by r·V(r) and P(r) in five columns of
//! `0.0000000E+00` numbers with a line counter in column 81. Nothing here
//! touches the filesystem; callers decide where the text goes.

use std::fmt::Write;

use crate::potential::{RadialWavefunction, ScfResult};
use crate::utils::conversions::rydberg_to_ev;

/// Significant digits in listed values
pub const LISTING_DIGITS: usize = 7;

/// Values per listing line
const VALUES_PER_LINE: usize = 5;

/// Field width of one listed value including its sign
const FIELD_WIDTH: usize = LISTING_DIGITS + 7;

/// Column after which the line counter is written
const COUNTER_COLUMN: usize = 80;

/// Format `value` as `±0.dddddddE±ee` with a mantissa in [0.1, 1)
pub fn format_scientific(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 || !value.is_finite() {
        if value.is_finite() {
            return format!("0.{}E+00", "0".repeat(digits));
        }
        return value.to_string();
    }

    // d.ddddddde±x carries the rounded significant digits and decimal exponent
    let rendered = format!("{:.*e}", digits - 1, value.abs());
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((&rendered, "0"));
    let significand: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent = exponent.parse::<i32>().unwrap_or(0) + 1;

    format!(
        "{}0.{}E{}{:02}",
        if value < 0.0 { "-" } else { "" },
        significand,
        if exponent < 0 { '-' } else { '+' },
        exponent.abs()
    )
}

/// Orbital energy table: label, occupation, energy in Rydberg and in eV
pub fn energy_table(name: &str, z: f64, orbitals: &[RadialWavefunction]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{} (Z={})", name, z as i64);
    let _ = writeln!(text);
    let _ = writeln!(text, "Orbital   # -e       E(NRL)        E(eV)");
    let _ = writeln!(text);

    for orbital in orbitals {
        let occupation = format!("{:?}", orbital.occupation);
        let energy = format!("{:.4}", orbital.energy);
        let padding = 16usize.saturating_sub(occupation.len() + energy.len()).max(1);
        let _ = writeln!(
            text,
            " {}       {}{}{}{:>13.4}",
            orbital.label(),
            occupation,
            " ".repeat(padding),
            energy,
            rydberg_to_ev(orbital.energy)
        );
    }

    text
}

/// Five-column listing of `values` with a line counter after column 80
pub fn value_listing(values: &[f64]) -> String {
    let mut text = String::new();
    for (index, chunk) in values.chunks(VALUES_PER_LINE).enumerate() {
        let fields: Vec<String> = chunk
            .iter()
            .map(|&value| format!("{:>width$}", format_scientific(value, LISTING_DIGITS), width = FIELD_WIDTH))
            .collect();
        let line = fields.join("  ");
        let _ = writeln!(text, "{:<width$}{}", line, index + 1, width = COUNTER_COLUMN);
    }
    text
}

/// Self-consistent r·V(r) listing
pub fn potential_listing(name: &str, z: f64, rv: &[f64]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{} (Z={})", name, z as i64);
    let _ = writeln!(text);
    let _ = writeln!(text, "Modified Herman-Skillman Potential Values r*V(r)");
    let _ = writeln!(text);
    text.push_str(&value_listing(rv));
    text
}

/// P(r) listing of every orbital with its outer mesh point count
pub fn wavefunction_listing(orbitals: &[RadialWavefunction]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Herman-Skillman Radial Wavefunction Values P(r) (r*R(r))");
    let _ = writeln!(text);

    for orbital in orbitals {
        let _ = writeln!(text, "Orbital: {}", orbital.label());
        let _ = writeln!(text, "Outer Radius Mesh Point: {}", orbital.values.len());
        let _ = writeln!(text);
        text.push_str(&value_listing(&orbital.values));
        let _ = writeln!(text);
    }

    text
}

/// SCF summary line followed by any warnings
pub fn convergence_summary(result: &ScfResult) -> String {
    let mut text = String::new();
    if result.converged {
        let _ = writeln!(
            text,
            "SCF converged in {} iterations, beta = {}",
            result.iterations,
            format_scientific(result.final_beta, 4)
        );
    } else {
        let _ = writeln!(
            text,
            "SCF not converged after {} iterations, beta = {}",
            result.iterations,
            format_scientific(result.final_beta, 4)
        );
    }
    for warning in &result.warnings {
        let _ = writeln!(text, "warning: {}", warning);
    }
    text
}

/// Full text report: energies, convergence summary, potential and wavefunctions
pub fn text_report(name: &str, z: f64, result: &ScfResult) -> String {
    let mut text = energy_table(name, z, &result.orbitals);
    text.push('\n');
    text.push_str(&convergence_summary(result));
    text.push_str("\n\n");
    text.push_str(&potential_listing(name, z, &result.potential));
    text.push('\n');
    text.push_str(&wavefunction_listing(&result.orbitals));
    text
}

/// The whole result as pretty-printed JSON
pub fn json_report(result: &ScfResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
