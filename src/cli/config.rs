//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Dataset URL or local CSV path
    #[arg(long, value_name = "URL|PATH")]
    source: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    data: DataOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct DataOutput {
    source: String,
    timeout_secs: u64,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            data: DataOutput {
                source: config.data.source.clone(),
                timeout_secs: config.data.timeout_secs,
            },
            ui: UiOutput {
                theme: config.ui.theme_mode.as_str().to_string(),
                show_help_on_startup: config.ui.show_help_on_startup,
            },
        }
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&ConfigOutput::from(&config))
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.source.is_none() && self.timeout.is_none() && self.theme.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --source, --timeout, or --theme",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(source) = &self.source {
            config.data.source.clone_from(source);
        }
        if let Some(timeout) = self.timeout {
            config.data.timeout_secs = timeout;
        }
        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("PokéDash Configuration");
    println!("======================");
    println!();

    println!("Data:");
    println!("  Source: {}", config.data.source);
    println!("  Timeout: {}s", config.data.timeout_secs);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!("  Help on Startup: {}", config.ui.show_help_on_startup);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_output_shape() {
        let output = ConfigOutput::from(&Config::default());
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["data"]["timeout_secs"], 30);
        assert_eq!(json["ui"]["theme"], "auto");
    }
}
