//! Scatter plot series: one colored series per primary type.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Attribute, Entry, Generation, PokemonType, RgbColor};

/// One plotted entry with its hover data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Value on the x axis
    pub x: f64,
    /// Value on the y axis
    pub y: f64,
    /// Entry name
    pub name: String,
    /// Pokédex number
    pub pokedex_number: u32,
    /// Generation
    pub generation: Generation,
}

/// Points sharing a primary type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    /// Primary type of every point
    #[serde(rename = "type")]
    pub pokemon_type: PokemonType,
    /// Legend label (bare type name)
    pub name: String,
    /// Series color
    pub color: RgbColor,
    /// Points in dataset order
    pub points: Vec<ScatterPoint>,
}

/// A complete scatter plot of two attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPlot {
    /// Attribute on the x axis
    pub x: Attribute,
    /// Attribute on the y axis
    pub y: Attribute,
    /// Series in canonical type order
    pub series: Vec<ScatterSeries>,
    /// Entries left out because a value was missing
    pub skipped: usize,
}

impl ScatterPlot {
    /// Total number of plotted points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Entries considered, whether plotted or skipped.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.point_count() + self.skipped
    }

    /// Whether nothing was plotted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// `(min, max)` over x and y values, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let first = points.next()?;
        let init = ([first.x, first.x], [first.y, first.y]);
        Some(points.fold(init, |(xb, yb), p| {
            ([xb[0].min(p.x), xb[1].max(p.x)], [yb[0].min(p.y), yb[1].max(p.y)])
        }))
    }
}

/// Builds the per-type series for two attributes.
pub fn build_scatter<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    x: Attribute,
    y: Attribute,
) -> ScatterPlot {
    let mut by_type: BTreeMap<PokemonType, Vec<ScatterPoint>> = BTreeMap::new();
    let mut skipped = 0;

    for entry in entries {
        let (Some(xv), Some(yv)) = (entry.attribute(x), entry.attribute(y)) else {
            skipped += 1;
            continue;
        };
        by_type
            .entry(entry.primary_type)
            .or_default()
            .push(ScatterPoint {
                x: xv,
                y: yv,
                name: entry.name.clone(),
                pokedex_number: entry.pokedex_number,
                generation: entry.generation,
            });
    }

    let series = by_type
        .into_iter()
        .map(|(pokemon_type, points)| ScatterSeries {
            pokemon_type,
            name: pokemon_type.as_str().to_string(),
            color: pokemon_type.color(),
            points,
        })
        .collect();

    ScatterPlot {
        x,
        y,
        series,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::loader::test_data::ten_rows;

    #[test]
    fn test_series_per_primary_type() {
        let dataset = ten_rows();
        let plot = build_scatter(dataset.entries(), Attribute::Attack, Attribute::Defense);

        let types: Vec<_> = plot.series.iter().map(|s| s.pokemon_type).collect();
        assert_eq!(
            types,
            vec![
                PokemonType::Fire,
                PokemonType::Water,
                PokemonType::Electric,
                PokemonType::Grass
            ]
        );
        assert_eq!(plot.point_count(), 10);
        assert_eq!(plot.skipped, 0);
        assert!(plot.series.iter().all(|s| s.color == s.pokemon_type.color()));
        assert!(plot.series.iter().all(|s| s.name == s.pokemon_type.as_str()));
    }

    #[test]
    fn test_points_carry_hover_data() {
        let dataset = ten_rows();
        let plot = build_scatter(dataset.entries(), Attribute::Speed, Attribute::Hp);
        let electric = plot
            .series
            .iter()
            .find(|s| s.pokemon_type == PokemonType::Electric)
            .unwrap();
        let pikachu = &electric.points[0];
        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.pokedex_number, 25);
        assert_eq!(pikachu.generation.number(), 1);
        assert!((pikachu.x - 90.0).abs() < f64::EPSILON);
        assert!((pikachu.y - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let dataset = ten_rows();
        let plot = build_scatter(dataset.entries(), Attribute::HeightM, Attribute::WeightKg);
        assert_eq!(plot.skipped, 1);
        assert_eq!(plot.point_count(), 9);
        assert_eq!(plot.entry_count(), dataset.len());
    }

    #[test]
    fn test_bounds() {
        let dataset = ten_rows();
        let plot = build_scatter(dataset.entries(), Attribute::Attack, Attribute::Speed);
        let (xb, yb) = plot.bounds().unwrap();
        assert!((xb[0] - 45.0).abs() < f64::EPSILON);
        assert!((xb[1] - 70.0).abs() < f64::EPSILON);
        assert!((yb[0] - 40.0).abs() < f64::EPSILON);
        assert!((yb[1] - 90.0).abs() < f64::EPSILON);

        let empty = build_scatter(std::iter::empty(), Attribute::Attack, Attribute::Speed);
        assert!(empty.is_empty());
        assert!(empty.bounds().is_none());
    }
}
