//! `pokedash columns`: the raw-to-display column mapping.

use clap::Args;

use crate::cli::common::{print_json, CliResult};
use crate::services::columns::column_renames;

/// Show how raw CSV columns are renamed
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ColumnsArgs {
    /// Execute columns command
    pub fn execute(&self) -> CliResult<()> {
        let renames = column_renames();
        if self.json {
            return print_json(&renames);
        }
        for rename in renames {
            println!("{:<20} {}", rename.raw, rename.display);
        }
        Ok(())
    }
}
