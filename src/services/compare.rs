//! Side-by-side comparison of two entries with signed deltas.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Attribute, Dataset, Entry, EntryRef, Generation, PokemonType};

/// Errors raised when resolving the entries to compare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// No entry matches the reference.
    #[error("no pokémon matches {0}")]
    EntryNotFound(EntryRef),
    /// More than one entry matches the reference.
    #[error("{reference} matches {matches} pokémon; use a pokédex number instead")]
    Ambiguous {
        /// The reference that matched several rows
        reference: EntryRef,
        /// How many rows matched
        matches: usize,
    },
}

/// Rounds to two decimal places, ties to even.
///
/// Rounding works on the exact binary value, so `2.675` (stored as
/// `2.67499999...`) becomes `2.67` while the exact tie `0.125` becomes `0.12`.
/// Scaling by 100 first would round both up.
#[must_use]
pub fn round2(value: f64) -> f64 {
    // float formatting rounds the exact value half to even
    let rounded = format!("{value:.2}").parse::<f64>().unwrap_or(value);
    // adding zero turns -0.0 into 0.0
    rounded + 0.0
}

/// One numeric attribute compared across both entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Compared attribute
    pub attribute: Attribute,
    /// Value of the first entry
    pub value1: Option<f64>,
    /// Value of the second entry
    pub value2: Option<f64>,
    /// `round2(value1 - value2)`
    pub delta1: Option<f64>,
    /// `round2(value2 - value1)`
    pub delta2: Option<f64>,
}

/// A categorical field shown side by side without a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalRow {
    /// Field label
    pub label: &'static str,
    /// Display value of the first entry
    pub value1: String,
    /// Display value of the second entry
    pub value2: String,
    /// Whether both values are equal
    pub equal: bool,
}

/// Identity of one compared entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    /// Pokédex number
    pub pokedex_number: u32,
    /// Name
    pub name: String,
    /// Generation
    pub generation: Generation,
    /// Primary type
    pub primary_type: PokemonType,
    /// Secondary type
    pub secondary_type: Option<PokemonType>,
    /// Artwork URL
    pub artwork_url: String,
}

impl From<&Entry> for EntrySummary {
    fn from(entry: &Entry) -> Self {
        Self {
            pokedex_number: entry.pokedex_number,
            name: entry.name.clone(),
            generation: entry.generation,
            primary_type: entry.primary_type,
            secondary_type: entry.secondary_type,
            artwork_url: crate::services::artwork_url(entry.pokedex_number),
        }
    }
}

/// Result of comparing two entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// First entry
    pub first: EntrySummary,
    /// Second entry
    pub second: EntrySummary,
    /// Categorical fields, no delta
    pub categorical: Vec<CategoricalRow>,
    /// Numeric attributes in the requested order
    pub rows: Vec<ComparisonRow>,
}

/// Looks up exactly one entry.
pub fn resolve<'a>(dataset: &'a Dataset, entry_ref: &EntryRef) -> Result<&'a Entry, CompareError> {
    match dataset.find(entry_ref).as_slice() {
        [] => Err(CompareError::EntryNotFound(entry_ref.clone())),
        [entry] => Ok(*entry),
        many => Err(CompareError::Ambiguous {
            reference: entry_ref.clone(),
            matches: many.len(),
        }),
    }
}

/// Compares two entries attribute by attribute.
pub fn compare(
    dataset: &Dataset,
    first: &EntryRef,
    second: &EntryRef,
    attributes: &[Attribute],
) -> Result<Comparison, CompareError> {
    let a = resolve(dataset, first)?;
    let b = resolve(dataset, second)?;
    Ok(compare_entries(a, b, attributes))
}

/// Compares two already resolved entries.
pub fn compare_entries(a: &Entry, b: &Entry, attributes: &[Attribute]) -> Comparison {
    let rows = attributes
        .iter()
        .map(|&attribute| {
            let value1 = a.attribute(attribute);
            let value2 = b.attribute(attribute);
            let (delta1, delta2) = match (value1, value2) {
                (Some(v1), Some(v2)) => (Some(round2(v1 - v2)), Some(round2(v2 - v1))),
                _ => (None, None),
            };
            ComparisonRow {
                attribute,
                value1,
                value2,
                delta1,
                delta2,
            }
        })
        .collect();

    let categorical = vec![
        categorical_row(
            "Pokédex No.",
            a.pokedex_number.to_string(),
            b.pokedex_number.to_string(),
        ),
        categorical_row(
            "Generation",
            a.generation.to_string(),
            b.generation.to_string(),
        ),
        categorical_row("Type", a.type_label(), b.type_label()),
        categorical_row("Weak to", weakness_label(a), weakness_label(b)),
    ];

    Comparison {
        first: EntrySummary::from(a),
        second: EntrySummary::from(b),
        categorical,
        rows,
    }
}

/// Attacking types dealing extra damage, e.g. `Fire x2, Ice x2`.
fn weakness_label(entry: &Entry) -> String {
    let weak = entry.matchups.weaknesses();
    if weak.is_empty() {
        return "none".to_string();
    }
    weak.iter()
        .map(|(t, multiplier)| format!("{} x{multiplier}", t.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn categorical_row(label: &'static str, value1: String, value2: String) -> CategoricalRow {
    let equal = value1 == value2;
    CategoricalRow {
        label,
        value1,
        value2,
        equal,
    }
}

/// Formats a delta the way the metric widgets show it, e.g. `+13` or `-0.35`.
#[must_use]
pub fn format_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{delta}")
    } else {
        format!("{delta}")
    }
}
