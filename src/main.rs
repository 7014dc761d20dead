//! PokéDash - terminal dashboard for the Pokémon dataset
//!
//! Without a subcommand the interactive dashboard starts. Subcommands run the
//! same computations headlessly and print text or JSON.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedash::cli::{
    ArtworkArgs, CliContext, CliError, CliResult, ColumnsArgs, CompareArgs, ConfigArgs,
    ScatterArgs, TableArgs, TypesArgs,
};
#[cfg(not(feature = "ratatui"))]
use pokedash::constants::APP_BINARY_NAME;

/// PokéDash - explore the Pokémon dataset from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dataset URL or local CSV path (overrides the configured source)
    #[arg(long, global = true, value_name = "URL|PATH")]
    data: Option<String>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dataset table
    Table(TableArgs),
    /// Count entries per primary type
    Types(TypesArgs),
    /// Build scatter series for two attributes
    Scatter(ScatterArgs),
    /// Compare two entries attribute by attribute
    Compare(CompareArgs),
    /// Print the artwork URL of an entry
    Artwork(ArtworkArgs),
    /// Show how raw CSV columns are renamed for display
    Columns(ColumnsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(cli: Cli) -> CliResult<()> {
    let data = cli.data.as_deref();
    match cli.command {
        Some(Command::Table(args)) => args.execute(&CliContext::new(data)?),
        Some(Command::Types(args)) => args.execute(&CliContext::new(data)?),
        Some(Command::Scatter(args)) => args.execute(&CliContext::new(data)?),
        Some(Command::Compare(args)) => args.execute(&CliContext::new(data)?),
        Some(Command::Artwork(args)) => args.execute(&CliContext::new(data)?),
        Some(Command::Columns(args)) => args.execute(),
        Some(Command::Config(args)) => args.execute(),
        None => run_dashboard(data),
    }
}

#[cfg(feature = "ratatui")]
fn run_dashboard(data: Option<&str>) -> CliResult<()> {
    use pokedash::tui;

    let ctx = CliContext::new(data)?;
    // Load before entering raw mode so errors print normally
    let dataset = ctx.dataset()?;
    tracing::info!(rows = dataset.len(), source = dataset.source(), "dataset loaded");

    let mut state = tui::AppState::new(dataset, ctx.config().clone());
    let mut terminal = tui::setup_terminal().map_err(|e| CliError::io(format!("{e:#}")))?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal).map_err(|e| CliError::io(format!("{e:#}")))?;
    result.map_err(|e| CliError::io(format!("{e:#}")))
}

#[cfg(not(feature = "ratatui"))]
fn run_dashboard(_data: Option<&str>) -> CliResult<()> {
    Err(CliError::validation(format!(
        "{APP_BINARY_NAME} was built without the dashboard; run '{APP_BINARY_NAME} --help' for the available commands"
    )))
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.kind.into()
        }
    }
}
