//! Generation filter driven by the 7 generation checkboxes.

use serde::Serialize;
use std::fmt;

use crate::models::{Dataset, Entry, GenerationSelection};

/// Advisory raised by the filter; never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterWarning {
    /// Every checkbox was cleared, so all entries are shown.
    NoGenerationSelected,
}

impl fmt::Display for FilterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGenerationSelected => {
                f.write_str("Select at least one generation! (showing all)")
            }
        }
    }
}

/// Entries kept by a generation selection.
#[derive(Debug, Clone)]
pub struct GenerationFilter<'a> {
    entries: Vec<&'a Entry>,
    selection: GenerationSelection,
    warning: Option<FilterWarning>,
}

impl<'a> GenerationFilter<'a> {
    /// Selected entries in dataset order.
    #[must_use]
    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    /// Number of selected entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The selection that produced this result.
    #[must_use]
    pub const fn selection(&self) -> GenerationSelection {
        self.selection
    }

    /// Advisory to show the user, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<FilterWarning> {
        self.warning
    }

    /// Line reporting how many entries are selected.
    #[must_use]
    pub fn summary(&self) -> String {
        selection_summary(self.count())
    }
}

/// Line reporting how many entries a selection kept.
#[must_use]
pub fn selection_summary(count: usize) -> String {
    format!("{count} pokémon selected")
}

/// Keeps the entries whose generation is checked.
///
/// With no generation checked the whole table is returned together with
/// [`FilterWarning::NoGenerationSelected`].
pub fn filter_by_generation(
    dataset: &Dataset,
    selection: GenerationSelection,
) -> GenerationFilter<'_> {
    if selection.is_empty() {
        return GenerationFilter {
            entries: dataset.entries().iter().collect(),
            selection,
            warning: Some(FilterWarning::NoGenerationSelected),
        };
    }

    GenerationFilter {
        entries: dataset
            .entries()
            .iter()
            .filter(|e| selection.contains(e.generation))
            .collect(),
        selection,
        warning: None,
    }
}
