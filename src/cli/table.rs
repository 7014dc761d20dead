//! `pokedash table`: the full dataset with display labels.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliResult};

/// Print the dataset table
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Only print the first N rows
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TableOutput<'a> {
    source: &'a str,
    fingerprint: &'a str,
    total: usize,
    columns: &'a [String],
    rows: &'a [Vec<String>],
}

impl TableArgs {
    /// Execute table command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.dataset()?;
        let records = dataset.records();
        let shown = &records[..self.limit.unwrap_or(records.len()).min(records.len())];

        if self.json {
            return print_json(&TableOutput {
                source: dataset.source(),
                fingerprint: dataset.fingerprint(),
                total: dataset.len(),
                columns: dataset.columns(),
                rows: shown,
            });
        }

        println!("{}", dataset.columns().join("\t"));
        for record in shown {
            println!("{}", record.join("\t"));
        }
        if shown.len() < records.len() {
            eprintln!("({} of {} rows shown)", shown.len(), records.len());
        }
        Ok(())
    }
}
