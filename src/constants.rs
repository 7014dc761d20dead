//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed external URLs.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PokéDash";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "pokedash";

/// Where the dataset is fetched from unless configured otherwise.
pub const DEFAULT_DATASET_URL: &str = "https://github.com/migupry/pokemondata/raw/main/pokemon.csv";

/// Artwork image location; `{n}` is replaced by the pokédex number.
pub const ARTWORK_URL_TEMPLATE: &str =
    "https://github.com/kvpratama/gan/raw/master/pokemon/data/pokemon/{n}.jpg";

/// Default HTTP timeout for fetching the dataset, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "POKEDASH_CONFIG_DIR";
