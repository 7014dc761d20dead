//! Type distribution: group by primary type, count, then color in count order.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Entry, PokemonType, RgbColor};

/// One slice of the type distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateRow {
    /// Primary type
    #[serde(rename = "type")]
    pub pokemon_type: PokemonType,
    /// Entries with this primary type
    pub count: usize,
    /// Display color looked up for this type
    pub color: RgbColor,
}

/// Counts per primary type, ordered by descending count.
///
/// Rows and colors are produced together, so `colors()[i]` always belongs
/// to `rows()[i]`. Ties keep canonical type order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeDistribution {
    rows: Vec<AggregateRow>,
    total: usize,
}

impl TypeDistribution {
    /// Rows in descending count order.
    #[must_use]
    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    /// Colors in exactly the row order.
    #[must_use]
    pub fn colors(&self) -> Vec<RgbColor> {
        self.rows.iter().map(|r| r.color).collect()
    }

    /// Sum of all counts (equals the number of input entries).
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether there were no entries to count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Share of one row in percent.
    #[must_use]
    pub fn percentage(&self, row: &AggregateRow) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            row.count as f64 * 100.0 / self.total as f64
        }
    }
}

/// Groups entries by primary type and counts them.
///
/// Types absent from the input are omitted rather than zero-filled.
pub fn aggregate_types<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> TypeDistribution {
    let mut counts: BTreeMap<PokemonType, usize> = BTreeMap::new();
    let mut total = 0;
    for entry in entries {
        *counts.entry(entry.primary_type).or_default() += 1;
        total += 1;
    }

    let counts: Vec<(PokemonType, usize)> = counts.into_iter().collect();
    TypeDistribution {
        rows: order_and_color(counts),
        total,
    }
}

/// Sorts `(type, count)` pairs by descending count and attaches colors.
///
/// The sort is stable, so ties keep their input order.
#[must_use]
pub fn order_and_color(mut counts: Vec<(PokemonType, usize)>) -> Vec<AggregateRow> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(pokemon_type, count)| AggregateRow {
            pokemon_type,
            count,
            color: pokemon_type.color(),
        })
        .collect()
}
