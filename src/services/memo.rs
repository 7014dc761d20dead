//! Explicit memo tables for derived chart data.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use crate::models::{Attribute, GenerationSelection};

/// Key of a memoized type distribution: dataset fingerprint plus selection.
pub type DistributionKey = (String, GenerationSelection);

/// Key of a memoized scatter plot: fingerprint, selection and both axes.
pub type ScatterKey = (String, GenerationSelection, Attribute, Attribute);

/// Unbounded map from argument tuple to computed value.
///
/// Values are handed out as `Arc` so callers can keep them after the table
/// is cleared.
#[derive(Debug)]
pub struct Memo<K, V> {
    table: Mutex<HashMap<K, Arc<V>>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            table: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash, V> Memo<K, V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for `key`, computing it with `f` on a miss.
    ///
    /// The lock is held while `f` runs, so each key is computed once.
    pub fn get_or_insert_with(&self, key: K, f: impl FnOnce() -> V) -> Arc<V> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(table.entry(key).or_insert_with(|| Arc::new(f())))
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    pub fn clear(&self) {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
