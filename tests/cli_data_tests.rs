//! End-to-end tests for the `pokedash` data commands.
//!
//! Every test points `--data` at a fixture CSV in a temp dir and isolates the
//! config directory, so nothing touches the network or the user's config.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the pokedash binary
fn pokedash_bin() -> String {
    std::env::var("CARGO_BIN_EXE_pokedash").unwrap_or_else(|_| "target/debug/pokedash".to_string())
}

/// Runs pokedash against a dataset with an isolated config directory.
fn run_with_data(data: &Path, args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    Command::new(pokedash_bin())
        .env("POKEDASH_CONFIG_DIR", config_dir.path())
        .arg("--data")
        .arg(data)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "Invalid JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

// ============================================================================
// Table
// ============================================================================

#[test]
fn test_table_json_uses_display_labels() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["table", "--json"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json = stdout_json(&output);
    assert_eq!(json["total"], 10);
    let columns: Vec<&str> = json["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert!(columns.contains(&"Pokédex No."));
    assert!(columns.contains(&"Sp. Attack"));
    assert!(!columns.contains(&"pokedex_number"));
    assert_eq!(json["rows"].as_array().unwrap().len(), 10);
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 64);
}

#[test]
fn test_table_limit() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["table", "--json", "--limit", "3"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["total"], 10);
    assert_eq!(json["rows"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let output = run_with_data(&dir.path().join("nope.csv"), &["table"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dataset unavailable"), "stderr: {stderr}");
}

#[test]
fn test_missing_column_is_io_error() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "broken.csv", &csv_without_attack());
    let output = run_with_data(&csv, &["types"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing column 'attack'"), "stderr: {stderr}");
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn test_types_generation_two() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["types", "--gen", "2", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["selected"], serde_json::json!([2]));
    assert!(json.get("warning").is_none());

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["count"] == 1));
    // Tie between grass and water keeps canonical order: water before grass
    assert_eq!(rows[0]["type"], "water");
    assert_eq!(rows[1]["type"], "grass");

    let colors = json["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0], rows[0]["color"]);
    assert_eq!(colors[1], rows[1]["color"]);
}

#[test]
fn test_types_all_generations_descending() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["types", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["count"], 10);
    assert_eq!(json["selected"], serde_json::json!([1, 2, 3, 4, 5, 6, 7]));
    let counts: Vec<u64> = json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![4, 3, 2, 1]);
    assert_eq!(json["rows"][0]["type"], "grass");
}

#[test]
fn test_types_no_generation_warns_and_shows_all() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["types", "--gen", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["count"], 10);
    assert_eq!(json["selected"], serde_json::json!([]));
    assert_eq!(json["warning"], "Select at least one generation! (showing all)");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Select at least one generation!"));
}

#[test]
fn test_types_empty_generation_text_output() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["types", "--gen", "7"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 pokémon selected"));
    assert!(stdout.contains("No entries to chart."));
}

#[test]
fn test_types_rejects_out_of_range_generation() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["types", "--gen", "9"]);

    assert!(!output.status.success());
}

// ============================================================================
// Scatter
// ============================================================================

#[test]
fn test_scatter_default_axes() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["scatter", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["plot"]["x"], "attack");
    assert_eq!(json["plot"]["y"], "defense");

    let series = json["plot"]["series"].as_array().unwrap();
    let names: Vec<&str> = series.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["fire", "water", "electric", "grass"]);
    let points: usize = series.iter().map(|s| s["points"].as_array().unwrap().len()).sum();
    assert_eq!(points, 10);
}

#[test]
fn test_scatter_skips_missing_values() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(
        &csv,
        &["scatter", "--x", "height_m", "--y", "weight_kg", "--gen", "3", "--json"],
    );

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["count"], 3);
    assert_eq!(json["plot"]["skipped"], 1);

    let water = json["plot"]["series"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["type"] == "water");
    assert!(water.is_none(), "Mudkip has no height so water has no points");
}

#[test]
fn test_scatter_point_hover_data() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["scatter", "--x", "speed", "--y", "hp", "--json"]);

    let json = stdout_json(&output);
    let electric = json["plot"]["series"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["type"] == "electric")
        .cloned()
        .unwrap();
    let pikachu = &electric["points"][0];
    assert_eq!(pikachu["name"], "Pikachu");
    assert_eq!(pikachu["pokedex_number"], 25);
    assert_eq!(pikachu["generation"], 1);
    assert_eq!(pikachu["x"].as_f64(), Some(90.0));
    assert_eq!(pikachu["y"].as_f64(), Some(35.0));
}

#[test]
fn test_scatter_rejects_unknown_attribute() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["scatter", "--x", "charisma"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("charisma"));
}

// ============================================================================
// Compare
// ============================================================================

#[test]
fn test_compare_attack_deltas() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(
        &csv,
        &["compare", "--first", "Bulbasaur", "--second", "Ivysaur", "--json"],
    );

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    let attack = json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["attribute"] == "attack")
        .cloned()
        .unwrap();
    assert_eq!(attack["value1"].as_f64(), Some(49.0));
    assert_eq!(attack["value2"].as_f64(), Some(62.0));
    assert_eq!(attack["delta1"].as_f64(), Some(-13.0));
    assert_eq!(attack["delta2"].as_f64(), Some(13.0));
}

#[test]
fn test_compare_defaults_to_first_and_fourth_rows() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["compare", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["first"]["name"], "Bulbasaur");
    assert_eq!(json["second"]["name"], "Squirtle");
    assert_eq!(json["rows"].as_array().unwrap().len(), 8);
}

#[test]
fn test_compare_text_shows_signed_deltas() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["compare", "--first", "1", "--second", "2"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("49 (-13)"), "stdout: {stdout}");
    assert!(stdout.contains("62 (+13)"), "stdout: {stdout}");
}

#[test]
fn test_compare_unknown_entry_is_validation_error() {
    let (_dir, csv) = sample_dataset();
    let output = run_with_data(&csv, &["compare", "--first", "Missingno"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missingno"));
}

// ============================================================================
// Artwork / Columns
// ============================================================================

#[test]
fn test_artwork_by_name_and_number() {
    let (_dir, csv) = sample_dataset();
    let expected = "https://github.com/kvpratama/gan/raw/master/pokemon/data/pokemon/25.jpg";

    for reference in ["pikachu", "25"] {
        let output = run_with_data(&csv, &["artwork", reference]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), expected);
    }
}

#[test]
fn test_columns_json() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(pokedash_bin())
        .env("POKEDASH_CONFIG_DIR", dir.path())
        .args(["columns", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    let renames = json.as_array().unwrap();
    let find = |raw: &str| {
        renames
            .iter()
            .find(|r| r["raw"] == raw)
            .map(|r| r["display"].as_str().unwrap().to_string())
    };
    assert_eq!(find("type1").as_deref(), Some("Type"));
    assert_eq!(find("classfication").as_deref(), Some("Classification"));
    assert_eq!(find("against_fight").as_deref(), Some("Against Fight"));
}

#[test]
fn test_columns_help_describes_rename_table() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(pokedash_bin())
        .env("POKEDASH_CONFIG_DIR", dir.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let columns_line = stdout
        .lines()
        .find(|l| l.trim_start().starts_with("columns"))
        .unwrap_or_else(|| panic!("no columns subcommand in help: {stdout}"));
    assert!(
        columns_line.contains("Show how raw CSV columns are renamed"),
        "{columns_line}"
    );
}
