//! The immutable, fully loaded dataset.

use chrono::{DateTime, Utc};

use super::{Entry, EntryRef};

/// The loaded table: typed entries plus the renamed display rows.
///
/// Built once by the loader and never mutated afterwards; downstream
/// views borrow from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    entries: Vec<Entry>,
    raw_columns: Vec<String>,
    columns: Vec<String>,
    records: Vec<Vec<String>>,
    source: String,
    fingerprint: String,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Assembles a dataset from already parsed parts.
    ///
    /// `columns` are display labels, one per raw column, and every record
    /// has one cell per column.
    #[must_use]
    pub fn from_parts(
        entries: Vec<Entry>,
        raw_columns: Vec<String>,
        columns: Vec<String>,
        records: Vec<Vec<String>>,
        source: impl Into<String>,
        fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            entries,
            raw_columns,
            columns,
            records,
            source: source.into(),
            fingerprint: fingerprint.into(),
            loaded_at: Utc::now(),
        }
    }

    /// All entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Display labels, in file column order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Raw column identifiers, in file column order.
    #[must_use]
    pub fn raw_columns(&self) -> &[String] {
        &self.raw_columns
    }

    /// Raw string cells of every row, aligned with [`Dataset::columns`].
    #[must_use]
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the data came from (URL or path).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Hex SHA-256 of the raw bytes.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// When the dataset was loaded.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Entries matching a reference; more than one means the reference is ambiguous.
    #[must_use]
    pub fn find(&self, entry_ref: &EntryRef) -> Vec<&Entry> {
        self.entries.iter().filter(|e| entry_ref.matches(e)).collect()
    }

    /// Entry at a table position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }
}
