//! Generations and the per-section generation checkbox selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseError;

/// Number of generations in the dataset.
pub const GENERATION_COUNT: usize = 7;

/// A release cohort, always in `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Generation(u8);

impl Generation {
    /// Creates a generation, rejecting values outside `1..=7`.
    pub fn new(number: u8) -> Result<Self, ParseError> {
        if (1..=GENERATION_COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ParseError::GenerationOutOfRange(i64::from(number)))
        }
    }

    /// The generation number (1-7).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into a [`GenerationSelection`].
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterates over all generations in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=GENERATION_COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for Generation {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Generation> for u8 {
    fn from(generation: Generation) -> Self {
        generation.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checkbox state for the 7 generations; index `i` is generation `i + 1`.
///
/// Defaults to every generation selected, like freshly rendered checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationSelection {
    flags: [bool; GENERATION_COUNT],
}

impl Default for GenerationSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl GenerationSelection {
    /// Every generation selected.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            flags: [true; GENERATION_COUNT],
        }
    }

    /// No generation selected.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            flags: [false; GENERATION_COUNT],
        }
    }

    /// Builds a selection from raw checkbox flags.
    #[must_use]
    pub const fn from_flags(flags: [bool; GENERATION_COUNT]) -> Self {
        Self { flags }
    }

    /// Builds a selection containing only the given generations.
    pub fn only(generations: impl IntoIterator<Item = Generation>) -> Self {
        let mut selection = Self::none();
        for generation in generations {
            selection.flags[generation.index()] = true;
        }
        selection
    }

    /// Parses a comma-separated list such as `"1,3"`.
    ///
    /// An empty string yields an empty selection.
    pub fn parse_list(input: &str) -> Result<Self, ParseError> {
        let mut generations = Vec::new();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let number: i64 = part
                .parse()
                .map_err(|_| ParseError::InvalidGeneration(part.to_string()))?;
            let number =
                u8::try_from(number).map_err(|_| ParseError::GenerationOutOfRange(number))?;
            generations.push(Generation::new(number)?);
        }
        Ok(Self::only(generations))
    }

    /// Raw checkbox flags.
    #[must_use]
    pub const fn flags(&self) -> [bool; GENERATION_COUNT] {
        self.flags
    }

    /// Whether the given generation is checked.
    #[must_use]
    pub const fn contains(&self, generation: Generation) -> bool {
        self.flags[generation.index()]
    }

    /// Flips one checkbox.
    pub fn toggle(&mut self, generation: Generation) {
        let idx = generation.index();
        self.flags[idx] = !self.flags[idx];
    }

    /// Whether no checkbox is checked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    /// The checked generations in order.
    pub fn selected(&self) -> impl Iterator<Item = Generation> + '_ {
        Generation::all().filter(|g| self.contains(*g))
    }
}

impl fmt::Display for GenerationSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list: Vec<String> = self.selected().map(|g| g.to_string()).collect();
        write!(f, "{}", list.join(","))
    }
}
