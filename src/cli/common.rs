//! Shared CLI plumbing: exit codes, errors and dataset access.

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::models::{Dataset, Generation, GenerationSelection};
use crate::services::{loader, CompareError, DataError, DataSource, FilterWarning};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown entry, invalid option value, bad config
    ValidationError = 1,
    /// The dataset or a file could not be read or written
    IoError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// A failed command with the exit code it maps to.
#[derive(Debug)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or data failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<DataError> for CliError {
    fn from(err: DataError) -> Self {
        Self::io(err.to_string())
    }
}

impl From<CompareError> for CliError {
    fn from(err: CompareError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Settings shared by every data command: the resolved source and timeout.
#[derive(Debug, Clone)]
pub struct CliContext {
    config: Config,
    source: DataSource,
}

impl CliContext {
    /// Loads the config and applies a `--data` override.
    pub fn new(data_override: Option<&str>) -> CliResult<Self> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let source = data_override.map_or_else(|| config.data_source(), DataSource::parse);
        Ok(Self { config, source })
    }

    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Where the dataset will be loaded from.
    #[must_use]
    pub const fn source(&self) -> &DataSource {
        &self.source
    }

    /// Loads the dataset once for this command.
    pub fn dataset(&self) -> CliResult<Arc<Dataset>> {
        Ok(Arc::new(loader::load(&self.source, self.config.timeout())?))
    }
}

/// Turns the `--gen` option into a selection.
///
/// Omitted means every generation; present without values means none.
pub fn selection_from_args(gens: Option<&[u8]>) -> CliResult<GenerationSelection> {
    let Some(numbers) = gens else {
        return Ok(GenerationSelection::all());
    };
    let generations = numbers
        .iter()
        .map(|n| Generation::new(*n))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::validation(e.to_string()))?;
    Ok(GenerationSelection::only(generations))
}

/// Prints the filter advisory to stderr.
pub fn report_warning(warning: Option<FilterWarning>) {
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }
}

/// Serializes a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_args() {
        assert_eq!(selection_from_args(None).unwrap(), GenerationSelection::all());
        assert!(selection_from_args(Some(&[])).unwrap().is_empty());

        let selection = selection_from_args(Some(&[1, 3])).unwrap();
        assert_eq!(selection.to_string(), "1,3");

        let err = selection_from_args(Some(&[8])).unwrap_err();
        assert_eq!(err.kind, ExitCode::ValidationError);
    }

    #[test]
    fn test_error_kinds() {
        let data = CliError::from(DataError::DuplicateIdentifier(1));
        assert_eq!(data.kind, ExitCode::IoError);
        let compare = CliError::from(CompareError::EntryNotFound(crate::models::EntryRef::Number(9)));
        assert_eq!(compare.kind, ExitCode::ValidationError);
    }
}
