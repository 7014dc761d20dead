//! `pokedash compare`: two entries side by side.

use clap::Args;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::models::{Attribute, Dataset, EntryRef};
use crate::services::compare::{compare, format_delta, Comparison};

/// Compare two entries attribute by attribute
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First entry (pokédex number or name); defaults to the 1st table row
    #[arg(long, value_name = "REF")]
    first: Option<EntryRef>,

    /// Second entry (pokédex number or name); defaults to the 4th table row
    #[arg(long, value_name = "REF")]
    second: Option<EntryRef>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Table position of the default first and second entries.
const DEFAULT_POSITIONS: (usize, usize) = (0, 3);

fn default_ref(dataset: &Dataset, position: usize) -> CliResult<EntryRef> {
    dataset
        .get(position)
        .or_else(|| dataset.entries().last())
        .map(|e| EntryRef::Number(e.pokedex_number))
        .ok_or_else(|| CliError::validation("The dataset has no entries to compare"))
}

impl CompareArgs {
    /// Execute compare command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.dataset()?;
        let first = match &self.first {
            Some(r) => r.clone(),
            None => default_ref(&dataset, DEFAULT_POSITIONS.0)?,
        };
        let second = match &self.second {
            Some(r) => r.clone(),
            None => default_ref(&dataset, DEFAULT_POSITIONS.1)?,
        };

        let comparison = compare(&dataset, &first, &second, &Attribute::ALL)?;

        if self.json {
            return print_json(&comparison);
        }
        print_comparison(&comparison);
        Ok(())
    }
}

fn print_comparison(comparison: &Comparison) {
    let (a, b) = (&comparison.first, &comparison.second);
    println!("{:<14} {:>20} {:>20}", "", a.name, b.name);
    for row in &comparison.categorical {
        let marker = if row.equal { "=" } else { " " };
        println!(
            "{:<14} {:>20} {:>20} {marker}",
            row.label, row.value1, row.value2
        );
    }
    println!();
    for row in &comparison.rows {
        let cell = |value: Option<f64>, delta: Option<f64>| match (value, delta) {
            (Some(v), Some(d)) => format!("{v} ({})", format_delta(d)),
            (Some(v), None) => v.to_string(),
            (None, _) => "-".to_string(),
        };
        println!(
            "{:<14} {:>20} {:>20}",
            row.attribute.label(),
            cell(row.value1, row.delta1),
            cell(row.value2, row.delta2)
        );
    }
}
