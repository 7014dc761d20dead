//! Data models for the Pokémon dataset and dashboard selections.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are independent of UI and loading logic.

pub mod attribute;
pub mod dataset;
pub mod entry;
pub mod generation;
pub mod pokemon_type;
pub mod rgb;

use thiserror::Error;

// Re-export all model types
pub use attribute::Attribute;
pub use dataset::Dataset;
pub use entry::{Entry, EntryRef, TypeMatchups};
pub use generation::{Generation, GenerationSelection, GENERATION_COUNT};
pub use pokemon_type::PokemonType;
pub use rgb::RgbColor;

/// Errors raised when parsing model values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not one of the 18 type categories.
    #[error("unknown type '{0}'")]
    UnknownType(String),
    /// Not one of the 8 numeric attributes.
    #[error("unknown attribute '{0}' (expected one of: attack, defense, hp, sp_attack, sp_defense, speed, height_m, weight_kg)")]
    UnknownAttribute(String),
    /// Generation is not a number.
    #[error("invalid generation '{0}'")]
    InvalidGeneration(String),
    /// Generation is outside 1-7.
    #[error("generation {0} is out of range (expected 1-7)")]
    GenerationOutOfRange(i64),
}
