/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Parser implementation for Herman-Skillman input decks
//!
//! Deck layout, after an optional preamble:
//!
//! ```text
//! CONT
//! <atom name>
//! KEY TOL THRESH MESH IPRATT MAXIT KUT RADION RATIO ALPHA
//! <110 table values over eleven lines>
//! Z NCORES NVALES XION
//! nlm occupation trial_energy      (NCORES + NVALES lines)
//! ```

use log::debug;
use std::fs;
use std::path::Path;

use super::config::ParserConfig;
use super::errors::{InputError, Result};
use super::model::AtomInput;
use crate::potential::input_potential::INPUT_TABLE_POINTS;
use crate::potential::OrbitalConfig;

/// Number of fields on the parameter line
const PARAMETER_FIELDS: usize = 10;

/// Non-blank deck line with its 1-based line number
#[derive(Debug, Clone, Copy)]
struct DeckLine<'a> {
    number: usize,
    text: &'a str,
}

impl<'a> DeckLine<'a> {
    fn fields(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }
}

/// Input deck parser
#[derive(Debug, Default)]
pub struct DeckParser {
    config: ParserConfig,
}

impl DeckParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a deck file
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<AtomInput> {
        let contents = fs::read_to_string(path.as_ref())?;
        debug!("Parsing input deck {}", path.as_ref().display());
        self.parse_str(&contents)
    }

    /// Parse deck contents
    pub fn parse_str(&self, contents: &str) -> Result<AtomInput> {
        let lines: Vec<DeckLine> = contents
            .lines()
            .enumerate()
            .map(|(i, text)| DeckLine {
                number: i + 1,
                text: text.trim_end(),
            })
            .filter(|line| !line.text.trim().is_empty())
            .collect();

        let start = lines
            .iter()
            .position(|line| line.text.starts_with("CONT"))
            .ok_or_else(|| InputError::MissingSection("CONT".to_string()))?;
        let mut cursor = lines[start + 1..].iter();

        let name = cursor
            .next()
            .ok_or_else(|| InputError::MissingSection("atom name".to_string()))?
            .text
            .trim()
            .to_string();

        let parameter_line = cursor
            .next()
            .ok_or_else(|| InputError::MissingSection("parameter line".to_string()))?;
        let parameters = parameter_line.fields();
        if parameters.len() < PARAMETER_FIELDS {
            return Err(InputError::parse(
                parameter_line.number,
                format!(
                    "expected {} parameters (KEY TOL THRESH MESH IPRATT MAXIT KUT RADION RATIO ALPHA), found {}",
                    PARAMETER_FIELDS,
                    parameters.len()
                ),
            ));
        }

        let number = parameter_line.number;
        let potential_key = parse_key(parameters[0], number)?;
        let beta_criterion = parse_float(parameters[1], number, "TOL")?;
        let thresh_criterion = parse_float(parameters[2], number, "THRESH")?;
        let mesh_count = parse_count(parameters[3], number, "MESH")?;
        let max_iterations = parse_count(parameters[5], number, "MAXIT")?;
        let ionic_radius = parse_float(parameters[7], number, "RADION")?;
        let branching_ratio = parse_float(parameters[8], number, "RATIO")?;
        let exchange_alpha = parse_float(parameters[9], number, "ALPHA")?;

        let mut potential_table = Vec::with_capacity(INPUT_TABLE_POINTS);
        while potential_table.len() < INPUT_TABLE_POINTS {
            let line = cursor
                .next()
                .ok_or_else(|| InputError::MissingSection("potential table".to_string()))?;
            for field in line.fields() {
                potential_table.push(parse_float(field, line.number, "potential value")?);
            }
        }
        if potential_table.len() > INPUT_TABLE_POINTS {
            return Err(InputError::InvalidValue(format!(
                "potential table must hold {} values, found {}",
                INPUT_TABLE_POINTS,
                potential_table.len()
            )));
        }

        let atom_line = cursor
            .next()
            .ok_or_else(|| InputError::MissingSection("Z NCORES NVALES XION".to_string()))?;
        let atom_fields = atom_line.fields();
        if atom_fields.len() < 4 {
            return Err(InputError::parse(
                atom_line.number,
                format!("expected Z NCORES NVALES XION, found {} fields", atom_fields.len()),
            ));
        }
        let z = parse_float(atom_fields[0], atom_line.number, "Z")?;
        let core_shells = parse_count(atom_fields[1], atom_line.number, "NCORES")?;
        let valence_shells = parse_count(atom_fields[2], atom_line.number, "NVALES")?;
        let ionicity = parse_float(atom_fields[3], atom_line.number, "XION")?;

        let orbital_count = core_shells + valence_shells;
        let mut orbitals = Vec::with_capacity(orbital_count);
        for _ in 0..orbital_count {
            let line = cursor.next().ok_or_else(|| {
                InputError::MissingSection(format!(
                    "orbital lines ({} expected, {} found)",
                    orbital_count,
                    orbitals.len()
                ))
            })?;
            orbitals.push(parse_orbital(line)?);
        }

        let input = AtomInput {
            name,
            z,
            potential_key,
            beta_criterion,
            thresh_criterion,
            mesh_count,
            max_iterations,
            ionic_radius,
            branching_ratio,
            exchange_alpha,
            ionicity,
            core_shells,
            valence_shells,
            potential_table,
            orbitals,
        };

        if self.config.validate {
            input.validate()?;
        }

        debug!(
            "Parsed deck for {} (Z={}) with {} orbitals",
            input.name,
            input.z,
            input.orbitals.len()
        );

        Ok(input)
    }
}

/// Parse a deck file with the default configuration
pub fn parse_deck<P: AsRef<Path>>(path: P) -> Result<AtomInput> {
    DeckParser::default().parse(path)
}

/// Parse deck contents with the default configuration
pub fn parse_deck_str(contents: &str) -> Result<AtomInput> {
    DeckParser::default().parse_str(contents)
}

/// `nlm occupation trial_energy`
fn parse_orbital(line: &DeckLine) -> Result<OrbitalConfig> {
    let fields = line.fields();
    if fields.len() < 3 {
        return Err(InputError::parse(
            line.number,
            "expected `nlm occupation trial_energy`",
        ));
    }

    let digits: Vec<u32> = fields[0].chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 3 || fields[0].chars().count() != 3 {
        return Err(InputError::parse(
            line.number,
            format!("orbital label must be three digits nlm, got `{}`", fields[0]),
        ));
    }

    Ok(OrbitalConfig {
        n: digits[0],
        l: digits[1],
        m: digits[2],
        occupation: parse_float(fields[1], line.number, "occupation")?,
        trial_energy: parse_float(fields[2], line.number, "trial energy")?,
    })
}

/// Parse a float, accepting Fortran `D` exponents
fn parse_float(field: &str, line: usize, name: &str) -> Result<f64> {
    field
        .replace(['D', 'd'], "E")
        .parse::<f64>()
        .map_err(|_| InputError::parse(line, format!("invalid {} `{}`", name, field)))
}

/// Parse the signed potential format KEY, written either as `0` or `0.0`
fn parse_key(field: &str, line: usize) -> Result<i32> {
    if let Ok(value) = field.parse::<i32>() {
        return Ok(value);
    }
    let value = parse_float(field, line, "KEY")?;
    if value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Ok(value as i32)
    } else {
        Err(InputError::parse(
            line,
            format!("KEY must be an integer, got `{}`", field),
        ))
    }
}

/// Parse a non-negative integer written either as `441` or `441.0`
fn parse_count(field: &str, line: usize, name: &str) -> Result<usize> {
    if let Ok(value) = field.parse::<usize>() {
        return Ok(value);
    }
    let value = parse_float(field, line, name)?;
    if value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(InputError::parse(
            line,
            format!("{} must be a non-negative integer, got `{}`", name, field),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(orbital_lines: &str) -> String {
        let mut text = String::from("preamble line\nCONT\nHYDROGEN\n0 1.0E-4 1.0D-6 441 0 20 0 0.0 0.0 1.0\n");
        for row in 0..11 {
            let values: Vec<String> = (0..10)
                .map(|col| format!("{:.4}", 1.0 - 0.005 * (row * 10 + col) as f64))
                .collect();
            text.push_str(&values.join(" "));
            text.push('\n');
        }
        text.push_str("1 1 0 0.0\n\n");
        text.push_str(orbital_lines);
        text
    }

    #[test]
    fn test_parse_minimal_deck() {
        let input = parse_deck_str(&deck("100 1.0 -1.0\ntrailing text\n")).unwrap();

        assert_eq!(input.name, "HYDROGEN");
        assert_eq!(input.potential_key, 0);
        assert_eq!(input.beta_criterion, 1.0e-4);
        assert_eq!(input.thresh_criterion, 1.0e-6);
        assert_eq!(input.mesh_count, 441);
        assert_eq!(input.max_iterations, 20);
        assert_eq!(input.exchange_alpha, 1.0);
        assert_eq!(input.potential_table.len(), INPUT_TABLE_POINTS);
        assert_eq!(input.potential_table[0], 1.0);
        assert_eq!(input.orbitals.len(), 1);
        assert_eq!(input.orbitals[0].label(), "100");
        assert_eq!(input.orbitals[0].trial_energy, -1.0);
    }

    #[test]
    fn test_missing_cont() {
        assert!(matches!(
            parse_deck_str("HYDROGEN\n0 1 2 3\n"),
            Err(InputError::MissingSection(_))
        ));
    }

    #[test]
    fn test_missing_orbital_lines() {
        assert!(matches!(
            parse_deck_str(&deck("")),
            Err(InputError::MissingSection(_))
        ));
    }

    #[test]
    fn test_bad_orbital_label_reports_line() {
        match parse_deck_str(&deck("1s 1.0 -1.0\n")) {
            Err(InputError::Parse { line, .. }) => assert_eq!(line, 18),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_count_accepts_integral_floats() {
        assert_eq!(parse_count("441.0", 1, "MESH").unwrap(), 441);
        assert!(parse_count("440.5", 1, "MESH").is_err());
        assert!(parse_count("-1", 1, "MESH").is_err());
    }

    #[test]
    fn test_negative_key_is_kept() {
        assert_eq!(parse_key("-1", 1).unwrap(), -1);
        assert_eq!(parse_key("2.0", 1).unwrap(), 2);
        assert!(parse_key("0.5", 1).is_err());

        let input = parse_deck_str(&deck("100 1.0 -1.0\n").replacen("\n0 1.0E-4", "\n-1 1.0E-4", 1))
            .unwrap();
        assert_eq!(input.potential_key, -1);
        assert_eq!(
            input.potential_format(),
            crate::potential::PotentialFormat::Unsupported(-1)
        );
    }
}
