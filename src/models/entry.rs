//! One row of the dataset and the ways of referring to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Attribute, Generation, PokemonType};

/// Damage multipliers taken from each attacking type.
///
/// Indexed by [`PokemonType::index`]; `None` when the column is absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeMatchups(pub [Option<f64>; 18]);

impl TypeMatchups {
    /// Multiplier against an attacking type.
    #[must_use]
    pub fn against(&self, attacker: PokemonType) -> Option<f64> {
        self.0[attacker.index()]
    }

    /// Attacking types that deal more than normal damage, strongest first.
    #[must_use]
    pub fn weaknesses(&self) -> Vec<(PokemonType, f64)> {
        let mut weak: Vec<(PokemonType, f64)> = PokemonType::ALL
            .iter()
            .filter_map(|t| self.against(*t).map(|m| (*t, m)))
            .filter(|(_, m)| *m > 1.0)
            .collect();
        weak.sort_by(|a, b| b.1.total_cmp(&a.1));
        weak
    }
}

/// A single Pokémon record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Pokédex number (unique identifier)
    pub pokedex_number: u32,
    /// Display name
    pub name: String,
    /// Japanese name
    pub japanese_name: String,
    /// Species classification (e.g. "Seed Pokémon")
    pub classification: String,
    /// Abilities in dataset order
    pub abilities: Vec<String>,
    /// Primary type
    pub primary_type: PokemonType,
    /// Optional secondary type
    pub secondary_type: Option<PokemonType>,
    /// Release generation
    pub generation: Generation,
    /// Legendary flag
    pub is_legendary: bool,
    /// Base attack
    pub attack: f64,
    /// Base defense
    pub defense: f64,
    /// Base hit points
    pub hp: f64,
    /// Base special attack
    pub sp_attack: f64,
    /// Base special defense
    pub sp_defense: f64,
    /// Base speed
    pub speed: f64,
    /// Height in meters (missing for some regional forms)
    pub height_m: Option<f64>,
    /// Weight in kilograms (missing for some regional forms)
    pub weight_kg: Option<f64>,
    /// Sum of base stats
    pub base_total: Option<f64>,
    /// Capture rate, kept verbatim because some rows are not numeric
    pub capture_rate: String,
    /// Steps to hatch
    pub base_egg_steps: Option<f64>,
    /// Base happiness
    pub base_happiness: Option<f64>,
    /// Experience needed to reach level 100
    pub experience_growth: Option<f64>,
    /// Percentage of males, `None` for genderless entries
    pub percentage_male: Option<f64>,
    /// Type matchup multipliers
    pub matchups: TypeMatchups,
}

impl Entry {
    /// Value of a numeric attribute.
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::Attack => Some(self.attack),
            Attribute::Defense => Some(self.defense),
            Attribute::Hp => Some(self.hp),
            Attribute::SpAttack => Some(self.sp_attack),
            Attribute::SpDefense => Some(self.sp_defense),
            Attribute::Speed => Some(self.speed),
            Attribute::HeightM => self.height_m,
            Attribute::WeightKg => self.weight_kg,
        }
    }

    /// Primary type followed by the secondary type, if any.
    pub fn types(&self) -> impl Iterator<Item = PokemonType> {
        std::iter::once(self.primary_type).chain(self.secondary_type)
    }

    /// Types joined for display, e.g. "grass/poison".
    #[must_use]
    pub fn type_label(&self) -> String {
        self.types()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// How a user refers to an entry: by pokédex number or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryRef {
    /// Pokédex number
    Number(u32),
    /// Display name, matched case-insensitively
    Name(String),
}

impl EntryRef {
    /// Whether this reference matches the given entry.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::Number(n) => entry.pokedex_number == *n,
            Self::Name(name) => entry.name.eq_ignore_ascii_case(name.trim()),
        }
    }
}

impl FromStr for EntryRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<u32>()
            .map_or_else(|_| Self::Name(trimmed.to_string()), Self::Number))
    }
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "#{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Entry {
        let mut matchups = [Some(1.0); 18];
        matchups[PokemonType::Fire.index()] = Some(2.0);
        matchups[PokemonType::Psychic.index()] = Some(2.0);
        matchups[PokemonType::Flying.index()] = Some(2.0);
        matchups[PokemonType::Ice.index()] = Some(2.0);
        matchups[PokemonType::Water.index()] = Some(0.5);
        Entry {
            pokedex_number: 1,
            name: "Bulbasaur".to_string(),
            japanese_name: "Fushigidaneフシギダネ".to_string(),
            classification: "Seed Pokémon".to_string(),
            abilities: vec!["Overgrow".to_string(), "Chlorophyll".to_string()],
            primary_type: PokemonType::Grass,
            secondary_type: Some(PokemonType::Poison),
            generation: Generation::new(1).unwrap(),
            is_legendary: false,
            attack: 49.0,
            defense: 49.0,
            hp: 45.0,
            sp_attack: 65.0,
            sp_defense: 65.0,
            speed: 45.0,
            height_m: Some(0.7),
            weight_kg: None,
            base_total: Some(318.0),
            capture_rate: "45".to_string(),
            base_egg_steps: Some(5120.0),
            base_happiness: Some(70.0),
            experience_growth: Some(1_059_860.0),
            percentage_male: Some(88.1),
            matchups: TypeMatchups(matchups),
        }
    }

    #[test]
    fn test_attribute_lookup() {
        let entry = bulbasaur();
        assert_eq!(entry.attribute(Attribute::Attack), Some(49.0));
        assert_eq!(entry.attribute(Attribute::HeightM), Some(0.7));
        assert_eq!(entry.attribute(Attribute::WeightKg), None);
    }

    #[test]
    fn test_type_label() {
        assert_eq!(bulbasaur().type_label(), "grass/poison");
    }

    #[test]
    fn test_weaknesses_sorted() {
        let weak = bulbasaur().matchups.weaknesses();
        assert_eq!(weak.len(), 4);
        assert!(weak.iter().all(|(_, m)| (*m - 2.0).abs() < f64::EPSILON));
        assert!(!weak.iter().any(|(t, _)| *t == PokemonType::Water));
    }

    #[test]
    fn test_entry_ref_parse_and_match() {
        let entry = bulbasaur();
        assert_eq!("1".parse::<EntryRef>().unwrap(), EntryRef::Number(1));
        assert!(EntryRef::Number(1).matches(&entry));
        assert!("bulbasaur".parse::<EntryRef>().unwrap().matches(&entry));
        assert!(!"Ivysaur".parse::<EntryRef>().unwrap().matches(&entry));
    }
}
