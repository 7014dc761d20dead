//! Shared test fixtures for E2E CLI and web tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header with every column the loader understands.
pub const HEADER: &str = "abilities,against_bug,against_dark,against_dragon,against_electric,against_fairy,against_fight,against_fire,against_flying,against_ghost,against_grass,against_ground,against_ice,against_normal,against_poison,against_psychic,against_rock,against_steel,against_water,attack,base_egg_steps,base_happiness,base_total,capture_rate,classfication,defense,experience_growth,height_m,hp,japanese_name,name,percentage_male,pokedex_number,sp_attack,sp_defense,speed,type1,type2,weight_kg,generation,is_legendary";

/// Builds one CSV row for [`HEADER`].
///
/// `stats` is attack, defense, hp, sp_attack, sp_defense, speed.
pub fn csv_row(
    number: u32,
    name: &str,
    types: (&str, &str),
    generation: u8,
    stats: [u32; 6],
    height_weight: (&str, &str),
) -> String {
    let [attack, defense, hp, sp_attack, sp_defense, speed] = stats;
    let against = vec!["1"; 18].join(",");
    let total: u32 = stats.iter().sum();
    format!(
        "\"['Overgrow', 'Chlorophyll']\",{against},{attack},5120,70,{total},45,Test Pokémon,{defense},1059860,{},{hp},Japanese,{name},88.1,{number},{sp_attack},{sp_defense},{speed},{},{},{},{generation},0",
        height_weight.0, types.0, types.1, height_weight.1,
    )
}

/// Ten rows over generations 1-3. Generation 2 has exactly two rows
/// (one grass, one water) and Mudkip has no height or weight.
pub fn sample_csv() -> String {
    let rows = [
        csv_row(1, "Bulbasaur", ("grass", "poison"), 1, [49, 49, 45, 65, 65, 45], ("0.7", "6.9")),
        csv_row(2, "Ivysaur", ("grass", "poison"), 1, [62, 63, 60, 80, 80, 60], ("1", "13")),
        csv_row(4, "Charmander", ("fire", ""), 1, [52, 43, 39, 60, 50, 65], ("0.6", "8.5")),
        csv_row(7, "Squirtle", ("water", ""), 1, [48, 65, 44, 50, 64, 43], ("0.5", "9")),
        csv_row(25, "Pikachu", ("electric", ""), 1, [55, 40, 35, 50, 50, 90], ("0.4", "6")),
        csv_row(152, "Chikorita", ("grass", ""), 2, [49, 65, 45, 49, 65, 45], ("0.9", "6.4")),
        csv_row(158, "Totodile", ("water", ""), 2, [65, 64, 50, 44, 48, 43], ("0.6", "9.5")),
        csv_row(252, "Treecko", ("grass", ""), 3, [45, 35, 40, 65, 55, 70], ("0.5", "5")),
        csv_row(255, "Torchic", ("fire", ""), 3, [60, 40, 45, 70, 50, 45], ("0.4", "2.5")),
        csv_row(258, "Mudkip", ("water", ""), 3, [70, 50, 50, 50, 50, 40], ("", "")),
    ];
    format!("{HEADER}\n{}\n", rows.join("\n"))
}

/// Writes `contents` to `name` inside `dir` and returns the path.
pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture CSV");
    path
}

/// Creates a temp dir holding `pokemon.csv` with [`sample_csv`].
pub fn sample_dataset() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(temp_dir.path(), "pokemon.csv", &sample_csv());
    (temp_dir, path)
}

/// A CSV missing the `attack` column.
pub fn csv_without_attack() -> String {
    sample_csv().replacen(",attack,", ",attack_stat,", 1)
}
