/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Error types for input deck parsing

use std::io;
use thiserror::Error;

/// Errors that can occur while reading an input deck or run configuration
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Missing required section: {0}")]
    MissingSection(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl InputError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        InputError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
