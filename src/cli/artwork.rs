//! `pokedash artwork`: print the artwork URL of an entry.

use clap::Args;

use crate::cli::common::{CliContext, CliResult};
use crate::models::EntryRef;
use crate::services::{artwork_url, resolve};

/// Print the artwork image URL of an entry
#[derive(Args, Debug)]
pub struct ArtworkArgs {
    /// Pokédex number or name
    #[arg(value_name = "REF")]
    entry: EntryRef,
}

impl ArtworkArgs {
    /// Execute artwork command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.dataset()?;
        let entry = resolve(&dataset, &self.entry)?;
        println!("{}", artwork_url(entry.pokedex_number));
        Ok(())
    }
}
