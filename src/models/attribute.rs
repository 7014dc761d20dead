//! The fixed set of numeric attributes used by the scatter plot and comparator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Numeric attribute of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Base attack
    Attack,
    /// Base defense
    Defense,
    /// Base hit points
    Hp,
    /// Base special attack
    SpAttack,
    /// Base special defense
    SpDefense,
    /// Base speed
    Speed,
    /// Height in meters
    HeightM,
    /// Weight in kilograms
    WeightKg,
}

impl Attribute {
    /// All attributes in display order; the first two are the default scatter axes.
    pub const ALL: [Self; 8] = [
        Self::Attack,
        Self::Defense,
        Self::Hp,
        Self::SpAttack,
        Self::SpDefense,
        Self::Speed,
        Self::HeightM,
        Self::WeightKg,
    ];

    /// Raw column identifier in the dataset.
    #[must_use]
    pub const fn raw_column(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Hp => "hp",
            Self::SpAttack => "sp_attack",
            Self::SpDefense => "sp_defense",
            Self::Speed => "speed",
            Self::HeightM => "height_m",
            Self::WeightKg => "weight_kg",
        }
    }

    /// Human-readable label, identical to the renamed column header.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Hp => "HP",
            Self::SpAttack => "Sp. Attack",
            Self::SpDefense => "Sp. Defense",
            Self::Speed => "Speed",
            Self::HeightM => "Height (m)",
            Self::WeightKg => "Weight (kg)",
        }
    }

    /// Position in [`Attribute::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = ParseError;

    /// Accepts the raw column name (`sp_attack`) or the label (`Sp. Attack`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| {
                a.raw_column().eq_ignore_ascii_case(needle) || a.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::UnknownAttribute(s.to_string()))
    }
}
