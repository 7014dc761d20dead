//! Dataset loading: fetch, parse, rename, cache.
//!
//! The dataset is a CSV file fetched once from a URL (or read from a local
//! path), turned into typed [`Entry`] values plus renamed display rows, and
//! kept in a [`DatasetCache`] for the rest of the session.

use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Dataset, Entry, Generation, PokemonType, TypeMatchups};
use crate::services::columns::{against_column, rename_headers};

/// Raw columns the typed entry cannot be built without.
const REQUIRED_COLUMNS: [&str; 11] = [
    "pokedex_number",
    "name",
    "type1",
    "generation",
    "is_legendary",
    "attack",
    "defense",
    "hp",
    "sp_attack",
    "sp_defense",
    "speed",
];

/// Errors raised while obtaining the dataset. All of them are fatal for a session.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source could not be read or fetched.
    #[error("dataset unavailable from {source_desc}: {reason}")]
    Unavailable {
        /// URL or path that failed
        source_desc: String,
        /// Underlying failure
        reason: String,
    },
    /// The content is not a valid dataset.
    #[error("malformed dataset at line {line}: {reason}")]
    Malformed {
        /// 1-based line in the CSV file (0 when unknown)
        line: u64,
        /// What was wrong
        reason: String,
    },
    /// A required column is absent from the header.
    #[error("malformed dataset: missing column '{0}'")]
    MissingColumn(String),
    /// Two rows share a pokédex number.
    #[error("malformed dataset: duplicate pokédex number {0}")]
    DuplicateIdentifier(u32),
}

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// Remote CSV fetched over HTTP(S)
    Url(String),
    /// Local CSV file
    File(PathBuf),
}

impl DataSource {
    /// Interprets a string as a URL when it has an http(s) scheme, otherwise as a path.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Reads the raw bytes of the source.
    pub fn fetch(&self, timeout: Duration) -> Result<Vec<u8>, DataError> {
        let unavailable = |reason: String| DataError::Unavailable {
            source_desc: self.to_string(),
            reason,
        };

        match self {
            Self::Url(url) => {
                info!(url = %url, "fetching dataset");
                let client = reqwest::blocking::Client::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(|e| unavailable(e.to_string()))?;
                let response = client
                    .get(url)
                    .send()
                    .and_then(reqwest::blocking::Response::error_for_status)
                    .map_err(|e| unavailable(e.to_string()))?;
                let bytes = response.bytes().map_err(|e| unavailable(e.to_string()))?;
                Ok(bytes.to_vec())
            }
            Self::File(path) => {
                info!(path = %path.display(), "reading dataset");
                std::fs::read(path).map_err(|e| unavailable(e.to_string()))
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses a dataset without caching.
pub fn load(source: &DataSource, timeout: Duration) -> Result<Dataset, DataError> {
    let bytes = source.fetch(timeout)?;
    parse_dataset(&bytes, &source.to_string())
}

/// Parses CSV bytes into a [`Dataset`].
pub fn parse_dataset(bytes: &[u8], source_desc: &str) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| malformed(&e))?
        .clone();
    let raw_columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let columns = rename_headers(raw_columns.iter().map(String::as_str));
    let index = HeaderIndex::new(&raw_columns)?;

    let mut entries = Vec::new();
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let record = result.map_err(|e| malformed(&e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let entry = index
            .entry(&record)
            .map_err(|reason| DataError::Malformed { line, reason })?;

        if !seen.insert(entry.pokedex_number) {
            return Err(DataError::DuplicateIdentifier(entry.pokedex_number));
        }

        records.push(record.iter().map(str::to_string).collect());
        entries.push(entry);
    }

    let fingerprint = format!("{:x}", Sha256::digest(bytes));
    info!(rows = entries.len(), source = source_desc, "dataset loaded");

    Ok(Dataset::from_parts(
        entries,
        raw_columns,
        columns,
        records,
        source_desc,
        fingerprint,
    ))
}

fn malformed(err: &csv::Error) -> DataError {
    let line = err.position().map_or(0, csv::Position::line);
    DataError::Malformed {
        line,
        reason: err.to_string(),
    }
}

/// Column positions of the header, used to build typed entries.
struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    fn new(raw_columns: &[String]) -> Result<Self, DataError> {
        let positions: HashMap<String, usize> = raw_columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|c| !positions.contains_key(**c))
        {
            return Err(DataError::MissingColumn((*missing).to_string()));
        }

        Ok(Self { positions })
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, column: &str) -> Option<&'r str> {
        self.positions
            .get(column)
            .and_then(|&i| record.get(i))
            .map(str::trim)
    }

    fn text(&self, record: &csv::StringRecord, column: &str) -> String {
        self.get(record, column).unwrap_or_default().to_string()
    }

    fn number(&self, record: &csv::StringRecord, column: &str) -> Result<f64, String> {
        self.optional_number(record, column)?
            .ok_or_else(|| format!("missing value for '{column}'"))
    }

    fn optional_number(
        &self,
        record: &csv::StringRecord,
        column: &str,
    ) -> Result<Option<f64>, String> {
        match self.get(record, column) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("invalid number '{raw}' in '{column}'")),
        }
    }

    fn entry(&self, record: &csv::StringRecord) -> Result<Entry, String> {
        let pokedex_raw = self.get(record, "pokedex_number").unwrap_or_default();
        let pokedex_number = pokedex_raw
            .parse::<u32>()
            .map_err(|_| format!("invalid pokédex number '{pokedex_raw}'"))?;

        let generation_raw = self.get(record, "generation").unwrap_or_default();
        let generation = generation_raw
            .parse::<u8>()
            .map_err(|_| format!("invalid generation '{generation_raw}'"))
            .and_then(|g| Generation::new(g).map_err(|e| e.to_string()))?;

        let primary_type = self
            .get(record, "type1")
            .unwrap_or_default()
            .parse::<PokemonType>()
            .map_err(|e| e.to_string())?;
        let secondary_type = match self.get(record, "type2") {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<PokemonType>().map_err(|e| e.to_string())?),
        };

        let legendary_raw = self.get(record, "is_legendary").unwrap_or_default();
        let is_legendary = parse_flag(legendary_raw)
            .ok_or_else(|| format!("invalid legendary flag '{legendary_raw}'"))?;

        let mut matchups = [None; 18];
        for t in PokemonType::ALL {
            let column = match t {
                // The raw data spells this matchup column "against_fight".
                PokemonType::Fighting if !self.positions.contains_key("against_fighting") => {
                    against_column("fight")
                }
                _ => against_column(t.as_str()),
            };
            matchups[t.index()] = self.optional_number(record, &column)?;
        }

        Ok(Entry {
            pokedex_number,
            name: self.text(record, "name"),
            japanese_name: self.text(record, "japanese_name"),
            classification: self.text(record, "classfication"),
            abilities: parse_abilities(self.get(record, "abilities").unwrap_or_default()),
            primary_type,
            secondary_type,
            generation,
            is_legendary,
            attack: self.number(record, "attack")?,
            defense: self.number(record, "defense")?,
            hp: self.number(record, "hp")?,
            sp_attack: self.number(record, "sp_attack")?,
            sp_defense: self.number(record, "sp_defense")?,
            speed: self.number(record, "speed")?,
            height_m: self.optional_number(record, "height_m")?,
            weight_kg: self.optional_number(record, "weight_kg")?,
            base_total: self.optional_number(record, "base_total")?,
            capture_rate: self.text(record, "capture_rate"),
            base_egg_steps: self.optional_number(record, "base_egg_steps")?,
            base_happiness: self.optional_number(record, "base_happiness")?,
            experience_growth: self.optional_number(record, "experience_growth")?,
            percentage_male: self.optional_number(record, "percentage_male")?,
            matchups: TypeMatchups(matchups),
        })
    }
}

/// Parses a Python-style list literal such as `['Overgrow', 'Chlorophyll']`.
fn parse_abilities(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|part| part.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Lazily loaded, process-wide dataset for one source.
///
/// The first successful [`DatasetCache::get_or_load`] fetches and parses the
/// data; later calls return the same `Arc` until [`DatasetCache::invalidate`]
/// is called. Failed loads are not cached.
#[derive(Debug)]
pub struct DatasetCache {
    source: DataSource,
    timeout: Duration,
    slot: RwLock<Option<Arc<Dataset>>>,
    fetches: AtomicUsize,
}

impl DatasetCache {
    /// Creates an empty cache for a source.
    #[must_use]
    pub fn new(source: DataSource, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            slot: RwLock::new(None),
            fetches: AtomicUsize::new(0),
        }
    }

    /// The source this cache loads from.
    #[must_use]
    pub const fn source(&self) -> &DataSource {
        &self.source
    }

    /// Returns the cached dataset, loading it on first use.
    pub fn get_or_load(&self) -> Result<Arc<Dataset>, DataError> {
        if let Some(dataset) = self.cached() {
            debug!(source = %self.source, "dataset cache hit");
            return Ok(dataset);
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded while we waited for the write lock.
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        self.fetches.fetch_add(1, Ordering::SeqCst);
        let dataset = Arc::new(load(&self.source, self.timeout)?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// The dataset if it has already been loaded.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<Dataset>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    /// Drops the cached dataset so the next access reloads it.
    pub fn invalidate(&self) {
        info!(source = %self.source, "dataset cache invalidated");
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Number of load attempts performed so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
pub(crate) mod test_data {
    //! Small CSV fixtures shared by the service tests.

    use crate::models::Dataset;

    /// Header with every column the loader understands.
    pub const HEADER: &str = "abilities,against_bug,against_dark,against_dragon,against_electric,against_fairy,against_fight,against_fire,against_flying,against_ghost,against_grass,against_ground,against_ice,against_normal,against_poison,against_psychic,against_rock,against_steel,against_water,attack,base_egg_steps,base_happiness,base_total,capture_rate,classfication,defense,experience_growth,height_m,hp,japanese_name,name,percentage_male,pokedex_number,sp_attack,sp_defense,speed,type1,type2,weight_kg,generation,is_legendary";

    /// Builds one CSV row for the full header.
    pub fn row(
        number: u32,
        name: &str,
        type1: &str,
        type2: &str,
        generation: u8,
        stats: [f64; 6],
        height_weight: (&str, &str),
    ) -> String {
        let [attack, defense, hp, sp_attack, sp_defense, speed] = stats;
        let against = vec!["1"; 18].join(",");
        format!(
            "\"['Ability']\",{against},{attack},5120,70,{total},45,Test Pokémon,{defense},1059860,{height},{hp},Japanese,{name},50,{number},{sp_attack},{sp_defense},{speed},{type1},{type2},{weight},{generation},0",
            total = attack + defense + hp + sp_attack + sp_defense + speed,
            height = height_weight.0,
            weight = height_weight.1,
        )
    }

    /// Ten rows spanning generations 1-3; generation 2 has exactly two rows.
    pub fn ten_rows_csv() -> String {
        let rows = [
            row(1, "Bulbasaur", "grass", "poison", 1, [49.0, 49.0, 45.0, 65.0, 65.0, 45.0], ("0.7", "6.9")),
            row(2, "Ivysaur", "grass", "poison", 1, [62.0, 63.0, 60.0, 80.0, 80.0, 60.0], ("1", "13")),
            row(4, "Charmander", "fire", "", 1, [52.0, 43.0, 39.0, 60.0, 50.0, 65.0], ("0.6", "8.5")),
            row(7, "Squirtle", "water", "", 1, [48.0, 65.0, 44.0, 50.0, 64.0, 43.0], ("0.5", "9")),
            row(25, "Pikachu", "electric", "", 1, [55.0, 40.0, 35.0, 50.0, 50.0, 90.0], ("0.4", "6")),
            row(152, "Chikorita", "grass", "", 2, [49.0, 65.0, 45.0, 49.0, 65.0, 45.0], ("0.9", "6.4")),
            row(158, "Totodile", "water", "", 2, [65.0, 64.0, 50.0, 44.0, 48.0, 43.0], ("0.6", "9.5")),
            row(252, "Treecko", "grass", "", 3, [45.0, 35.0, 40.0, 65.0, 55.0, 70.0], ("0.5", "5")),
            row(255, "Torchic", "fire", "", 3, [60.0, 40.0, 45.0, 70.0, 50.0, 45.0], ("0.4", "2.5")),
            row(258, "Mudkip", "water", "", 3, [70.0, 50.0, 50.0, 50.0, 50.0, 40.0], ("", "")),
        ];
        format!("{HEADER}\n{}\n", rows.join("\n"))
    }

    /// The ten-row fixture, parsed.
    pub fn ten_rows() -> Dataset {
        super::parse_dataset(ten_rows_csv().as_bytes(), "fixture").unwrap()
    }
}
