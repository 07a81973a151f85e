/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Command Line Interface (CLI) module
//!
//! Reads an input deck, applies configuration file and flag overrides, runs
//! the calculation and writes a text or JSON report.

use anyhow::Context;
use clap::{Args, Parser, ValueEnum};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::input::{parse_deck, RunConfig};
use crate::output::{json_report, text_report};
use crate::HermanSkillman;

const ABOUT: &str =
    "Self-consistent Hartree-Fock-Slater atomic structure calculations on the Herman-Skillman mesh.";

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
pub struct Cli {
    /// Input deck with the 110-point starting potential and electron configuration
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Run configuration in JSON format
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub solver: SolverOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Overrides of the run configuration
#[derive(Args, Debug)]
#[command(next_help_heading = "Solver Options")]
pub struct SolverOptions {
    /// Pratt mixing factor in (0, 1)
    #[arg(long)]
    pub pratt: Option<f64>,

    /// Maximum SCF iterations; overrides MAXIT from the deck
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Maximum passes of the orbital energy threshold loop
    #[arg(long)]
    pub max_thresh_iterations: Option<usize>,
}

/// Output format and destination
#[derive(Args, Debug)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path; results go to standard output when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for the calculation results
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Energy table followed by potential and wavefunction listings
    Text,
    /// The complete result as JSON
    Json,
}

impl Cli {
    /// Log filter implied by the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Defaults, then the configuration file, then command-line flags
    pub fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("failed to read configuration {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(pratt) = self.solver.pratt {
            config.pratt = pratt;
        }
        if let Some(max_iterations) = self.solver.max_iterations {
            config.max_scf_iterations = Some(max_iterations);
        }
        if let Some(max_thresh) = self.solver.max_thresh_iterations {
            config.max_thresh_iterations = max_thresh;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run the command-line program
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.run_config()?;
    let input = parse_deck(&cli.input)
        .with_context(|| format!("failed to read input deck {}", cli.input.display()))?;
    info!("Running {} (Z={})", input.name, input.z);

    let result = HermanSkillman::new(config).run(&input)?;

    let report = match cli.output.format {
        OutputFormat::Text => text_report(&input.name, input.z, &result),
        OutputFormat::Json => json_report(&result).context("failed to serialize result")?,
    };

    let mut writer: Box<dyn Write> = match &cli.output.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };
    writer.write_all(report.as_bytes())?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::parse_from([
            "hfs-rs",
            "argon.dat",
            "--pratt",
            "0.5",
            "--max-iterations",
            "12",
            "-vv",
            "--format",
            "json",
        ]);

        let config = cli.run_config().unwrap();
        assert_eq!(config.pratt, 0.5);
        assert_eq!(config.max_scf_iterations, Some(12));
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_pratt_flag() {
        let cli = Cli::parse_from(["hfs-rs", "argon.dat", "--pratt", "1.2"]);
        assert!(cli.run_config().is_err());
    }
}
