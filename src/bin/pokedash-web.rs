//! PokéDash Web Server Binary
//!
//! This binary starts the PokéDash web server that serves the dashboard
//! computations as a JSON API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, configured dataset source)
//! pokedash-web
//!
//! # Specify port and a local copy of the dataset
//! pokedash-web --port 8080 --data ./pokemon.csv
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedash::config::Config;
use pokedash::web;

/// PokéDash Web Server - JSON API over the Pokémon dataset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Dataset URL or local CSV path (overrides the configured source)
    #[arg(long, value_name = "URL|PATH")]
    data: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let mut config = Config::load().unwrap_or_default();
    if let Some(data) = args.data {
        config.data.source = data;
    }
    config.validate()?;

    info!("Dataset source: {}", config.data.source);

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(config, addr).await
}
