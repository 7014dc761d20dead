//! `pokedash types`: type distribution of the selected generations.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{
    print_json, report_warning, selection_from_args, CliContext, CliResult,
};
use crate::models::{Generation, RgbColor};
use crate::services::{aggregate_types, filter_by_generation, AggregateRow};

/// Count entries by primary type
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Generations to include, e.g. `--gen 1,3`; `--gen` alone selects none
    #[arg(
        long = "gen",
        value_name = "N",
        value_delimiter = ',',
        num_args = 0..,
        value_parser = clap::value_parser!(u8).range(1..=7)
    )]
    generations: Option<Vec<u8>>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TypesOutput {
    selected: Vec<Generation>,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    rows: Vec<AggregateRow>,
    colors: Vec<RgbColor>,
}

impl TypesArgs {
    /// Execute types command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let selection = selection_from_args(self.generations.as_deref())?;
        let dataset = ctx.dataset()?;
        let filtered = filter_by_generation(&dataset, selection);
        report_warning(filtered.warning());

        let distribution = aggregate_types(filtered.entries().iter().copied());

        if self.json {
            return print_json(&TypesOutput {
                selected: selection.selected().collect(),
                count: filtered.count(),
                warning: filtered.warning().map(|w| w.to_string()),
                rows: distribution.rows().to_vec(),
                colors: distribution.colors(),
            });
        }

        println!("{}", filtered.summary());
        if distribution.is_empty() {
            println!("No entries to chart.");
            return Ok(());
        }
        for row in distribution.rows() {
            println!(
                "{:<10} {:>5} {:>6.1}%  {}",
                row.pokemon_type.as_str(),
                row.count,
                distribution.percentage(row),
                row.color
            );
        }
        Ok(())
    }
}
