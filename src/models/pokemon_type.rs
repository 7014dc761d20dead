//! The 18 elemental type categories and their fixed display colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ParseError, RgbColor};

/// Elemental type category of an entry.
///
/// Variant order is the canonical type order used for tie-breaking and for
/// laying out per-type series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    /// Normal
    Normal,
    /// Fire
    Fire,
    /// Water
    Water,
    /// Electric
    Electric,
    /// Grass
    Grass,
    /// Ice
    Ice,
    /// Fighting
    Fighting,
    /// Poison
    Poison,
    /// Ground
    Ground,
    /// Flying
    Flying,
    /// Psychic
    Psychic,
    /// Bug
    Bug,
    /// Rock
    Rock,
    /// Ghost
    Ghost,
    /// Dragon
    Dragon,
    /// Dark
    Dark,
    /// Steel
    Steel,
    /// Fairy
    Fairy,
}

impl PokemonType {
    /// All type categories in canonical order.
    pub const ALL: [Self; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Lowercase identifier as it appears in the raw dataset.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Capitalized label, e.g. `Psychic`.
    #[must_use]
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }

    /// Fixed display color for this type.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        match self {
            Self::Normal => RgbColor::new(0xA8, 0xA7, 0x7A),
            Self::Fire => RgbColor::new(0xEE, 0x81, 0x30),
            Self::Water => RgbColor::new(0x63, 0x90, 0xF0),
            Self::Electric => RgbColor::new(0xF7, 0xD0, 0x2C),
            Self::Grass => RgbColor::new(0x7A, 0xC7, 0x4C),
            Self::Ice => RgbColor::new(0x96, 0xD9, 0xD6),
            Self::Fighting => RgbColor::new(0xC2, 0x2E, 0x28),
            Self::Poison => RgbColor::new(0xA3, 0x3E, 0xA1),
            Self::Ground => RgbColor::new(0xE2, 0xBF, 0x65),
            Self::Flying => RgbColor::new(0xA9, 0x8F, 0xF3),
            Self::Psychic => RgbColor::new(0xF9, 0x55, 0x87),
            Self::Bug => RgbColor::new(0xA6, 0xB9, 0x1A),
            Self::Rock => RgbColor::new(0xB6, 0xA1, 0x36),
            Self::Ghost => RgbColor::new(0x73, 0x57, 0x97),
            Self::Dragon => RgbColor::new(0x6F, 0x35, 0xFC),
            Self::Dark => RgbColor::new(0x70, 0x57, 0x46),
            Self::Steel => RgbColor::new(0xB7, 0xB7, 0xCE),
            Self::Fairy => RgbColor::new(0xD6, 0x85, 0xAD),
        }
    }

    /// Position of this type in [`PokemonType::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::UnknownType(s.to_string()))
    }
}

/// Uppercases the first character of a type name.
///
/// Also applied to raw spellings that are not a [`PokemonType`], such as the
/// `fight` matchup column.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
