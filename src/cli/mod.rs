//! CLI command handlers for PokéDash.
//!
//! Headless, scriptable access to the dashboard computations. Every data
//! command loads the dataset once, runs the same services as the
//! interactive dashboard and prints text or JSON.

pub mod artwork;
pub mod columns;
pub mod common;
pub mod compare;
pub mod config;
pub mod scatter;
pub mod table;
pub mod types;

// Re-export types used by main.rs and tests
pub use artwork::ArtworkArgs;
pub use columns::ColumnsArgs;
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use compare::CompareArgs;
pub use config::ConfigArgs;
pub use scatter::ScatterArgs;
pub use table::TableArgs;
pub use types::TypesArgs;
