//! `pokedash scatter`: two attributes plotted per type.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{
    print_json, report_warning, selection_from_args, CliContext, CliResult,
};
use crate::models::{Attribute, Generation};
use crate::services::{build_scatter, filter_by_generation, ScatterPlot};

/// Build scatter series of two attributes
#[derive(Args, Debug)]
pub struct ScatterArgs {
    /// Attribute on the x axis
    #[arg(long, value_name = "ATTR", default_value = "attack")]
    x: Attribute,

    /// Attribute on the y axis
    #[arg(long, value_name = "ATTR", default_value = "defense")]
    y: Attribute,

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
struct ScatterOutput {
    selected: Vec<Generation>,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    plot: ScatterPlot,
}

impl ScatterArgs {
    /// Execute scatter command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let selection = selection_from_args(self.generations.as_deref())?;
        let dataset = ctx.dataset()?;
        let filtered = filter_by_generation(&dataset, selection);
        report_warning(filtered.warning());

        let plot = build_scatter(filtered.entries().iter().copied(), self.x, self.y);

        if self.json {
            return print_json(&ScatterOutput {
                selected: selection.selected().collect(),
                count: filtered.count(),
                warning: filtered.warning().map(|w| w.to_string()),
                plot,
            });
        }

        println!("{}", filtered.summary());
        println!("{} vs {}", plot.x.label(), plot.y.label());
        if plot.is_empty() {
            println!("No entries to plot.");
        }
        for series in &plot.series {
            println!();
            println!("{} ({}, {} points)", series.name, series.color, series.points.len());
            for point in &series.points {
                println!(
                    "  #{:<4} {:<14} {:>8} {:>8}",
                    point.pokedex_number, point.name, point.x, point.y
                );
            }
        }
        if plot.skipped > 0 {
            eprintln!("{} entries skipped for missing values", plot.skipped);
        }
        Ok(())
    }
}
