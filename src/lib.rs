//! PokéDash library
//!
//! Loads the Pokémon CSV dataset and provides the computations behind the
//! dashboard: generation filtering, the type distribution, attribute scatter
//! series and the two-entry comparison. The terminal dashboard, the CLI and
//! the optional JSON API are thin layers over [`services`].

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
