/*
MIT License

Copyright (c) 2025 Ameyanagi

Herman-Skillman Hartree-Fock-Slater atomic structure calculations.
*/

//! Input handling
//!
//! This module parses Herman-Skillman input decks into an [`AtomInput`] and
//! loads the [`RunConfig`] that carries numerical settings the deck does not.

pub mod config;
pub mod errors;
pub mod model;
pub mod parser;

pub use config::{ParserConfig, RunConfig};
pub use errors::{InputError, Result};
pub use model::AtomInput;
pub use parser::{parse_deck, parse_deck_str, DeckParser};
