//! End-to-end tests for `pokedash config` commands.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Path to the pokedash binary
fn pokedash_bin() -> String {
    std::env::var("CARGO_BIN_EXE_pokedash").unwrap_or_else(|_| "target/debug/pokedash".to_string())
}

/// Runs pokedash with the given config directory.
/// Pass the same directory to several calls to share state between them.
fn run_in(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(pokedash_bin())
        .env("POKEDASH_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn show_json(config_dir: &Path) -> Value {
    let output = run_in(config_dir, &["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    serde_json::from_slice(&output.stdout).expect("Invalid JSON")
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().unwrap();
    let json = show_json(dir.path());

    assert_eq!(
        json["data"]["source"],
        "https://github.com/migupry/pokemondata/raw/main/pokemon.csv"
    );
    assert_eq!(json["data"]["timeout_secs"], 30);
    assert_eq!(json["ui"]["theme"], "auto");
    assert_eq!(json["ui"]["show_help_on_startup"], false);
    // Showing never writes a file
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_persists() {
    let dir = TempDir::new().unwrap();
    let output = run_in(
        dir.path(),
        &[
            "config", "set", "--source", "/data/pokemon.csv", "--timeout", "5", "--theme", "dark",
        ],
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration updated successfully."));
    assert!(dir.path().join("config.toml").exists());

    let json = show_json(dir.path());
    assert_eq!(json["data"]["source"], "/data/pokemon.csv");
    assert_eq!(json["data"]["timeout_secs"], 5);
    assert_eq!(json["ui"]["theme"], "dark");
}

#[test]
fn test_config_set_requires_an_option() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["config", "set"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one configuration option"));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["config", "set", "--timeout", "0"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run_in(dir.path(), &["config", "set", "--theme", "neon"]);
    assert_eq!(output.status.code(), Some(1));

    // Nothing was saved
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_configured_source_is_used_without_data_flag() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("missing.csv");
    let output = run_in(
        dir.path(),
        &["config", "set", "--source", csv.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(0));

    let output = run_in(dir.path(), &["types"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.csv"));
}

#[test]
fn test_corrupt_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[data\nsource = ").unwrap();

    let output = run_in(dir.path(), &["config", "show"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
