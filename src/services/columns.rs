//! Raw column identifiers and their display labels.
//!
//! The mapping is one-to-one: no two raw columns share a display label, so
//! every renamed header can be mapped back to its raw identifier.

use serde::Serialize;
use std::sync::OnceLock;

use crate::models::pokemon_type::{capitalize, PokemonType};

/// Matchup column that uses the short "fight" spelling in the raw data.
const EXTRA_AGAINST_COLUMN: &str = "fight";

/// Named columns with a hand-picked label.
const NAMED_COLUMNS: [(&str, &str); 23] = [
    ("abilities", "Abilities"),
    ("name", "Name"),
    ("pokedex_number", "Pokédex No."),
    ("generation", "Generation"),
    ("japanese_name", "Japanese Name"),
    ("percentage_male", "% Male"),
    ("base_egg_steps", "Base Egg Steps"),
    ("base_happiness", "Base Happiness"),
    ("base_total", "Base Total"),
    ("capture_rate", "Capture Rate"),
    ("classfication", "Classification"),
    ("experience_growth", "Experience Growth"),
    ("is_legendary", "Legendary?"),
    ("type1", "Type"),
    ("type2", "Type 2"),
    ("attack", "Attack"),
    ("defense", "Defense"),
    ("height_m", "Height (m)"),
    ("hp", "HP"),
    ("sp_attack", "Sp. Attack"),
    ("sp_defense", "Sp. Defense"),
    ("speed", "Speed"),
    ("weight_kg", "Weight (kg)"),
];

/// One raw-to-display column rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRename {
    /// Identifier in the CSV header
    pub raw: String,
    /// Label shown to the user
    pub display: String,
}

/// The full rename table: named columns followed by the matchup columns.
pub fn column_renames() -> &'static [ColumnRename] {
    static RENAMES: OnceLock<Vec<ColumnRename>> = OnceLock::new();
    RENAMES.get_or_init(|| {
        let named = NAMED_COLUMNS.iter().map(|(raw, display)| ColumnRename {
            raw: (*raw).to_string(),
            display: (*display).to_string(),
        });

        let against = PokemonType::ALL
            .iter()
            .map(PokemonType::as_str)
            .chain(std::iter::once(EXTRA_AGAINST_COLUMN))
            .map(|t| ColumnRename {
                raw: against_column(t),
                display: format!("Against {}", capitalize(t)),
            });

        named.chain(against).collect()
    })
}

/// Raw identifier of the matchup column for a type name (`against_fire`).
#[must_use]
pub fn against_column(type_name: &str) -> String {
    format!("against_{type_name}")
}

/// Display label for a raw column; unmapped columns keep their raw name.
#[must_use]
pub fn display_label(raw: &str) -> &str {
    column_renames()
        .iter()
        .find(|r| r.raw == raw)
        .map_or(raw, |r| r.display.as_str())
}

/// Raw identifier for a display label, if it was produced by a rename.
#[must_use]
pub fn raw_column(display: &str) -> Option<&'static str> {
    column_renames()
        .iter()
        .find(|r| r.display == display)
        .map(|r| r.raw.as_str())
}

/// Renames a header row.
#[must_use]
pub fn rename_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    headers
        .into_iter()
        .map(|h| display_label(h.trim()).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rename_table_size() {
        // 23 named columns, 18 matchup columns, plus "against_fight"
        assert_eq!(column_renames().len(), 23 + 18 + 1);
    }

    #[test]
    fn test_rename_is_invertible() {
        let displays: HashSet<_> = column_renames().iter().map(|r| &r.display).collect();
        let raws: HashSet<_> = column_renames().iter().map(|r| &r.raw).collect();
        assert_eq!(displays.len(), column_renames().len());
        assert_eq!(raws.len(), column_renames().len());

        for rename in column_renames() {
            assert_eq!(display_label(&rename.raw), rename.display);
            assert_eq!(raw_column(&rename.display), Some(rename.raw.as_str()));
        }
    }

    #[test]
    fn test_against_columns() {
        assert_eq!(display_label("against_fire"), "Against Fire");
        assert_eq!(display_label("against_fight"), "Against Fight");
        assert_eq!(display_label("against_fighting"), "Against Fighting");
    }

    #[test]
    fn test_unmapped_columns_pass_through() {
        assert_eq!(display_label("mystery"), "mystery");
        assert_eq!(raw_column("mystery"), None);
        assert_eq!(
            rename_headers(["name", "type1", "extra"]),
            vec!["Name", "Type", "extra"]
        );
    }
}
