//! Sitemint CLI.
//!
//! Command-line tool that generates site content with a text-generation
//! API and publishes it to a content-management backend.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `config` - Collect and persist the backend and generation-API
//!   credentials
//! - `create` - Prompt for a site plan, generate pages and posts, and
//!   push them to the backend
//!
//! Running without a subcommand is the same as `sitemint create`.
//!
//! # Examples
//!
//! ```bash
//! # One-time setup
//! sitemint config
//!
//! # Generate and publish content
//! sitemint create
//!
//! # Machine-readable output
//! sitemint --format json create
//! ```

// Command handlers share an async signature even when they never await.
#![allow(clippy::unused_async)]
#![allow(clippy::format_push_string)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitemint_core::cli::{ExitCode, OutputFormat};
use sitemint_core::DEFAULT_CREDENTIALS_FILE;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod formatters;

/// Generate and publish site content.
///
/// Prompts for site parameters, generates pages and posts with a
/// text-generation API, and publishes them to a content-management
/// backend via its admin API.
#[derive(Parser, Debug)]
#[command(name = "sitemint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `create`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,

    /// Path to the credentials file
    #[arg(long = "credentials", global = true, value_name = "PATH")]
    credentials: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure backend and generation-API credentials.
    ///
    /// Prompts for the backend URL, the backend admin key, and the
    /// generation-API key, and saves them as `KEY=value` lines in the
    /// credentials file (default `.env`). Re-running overwrites the
    /// previous values.
    ///
    /// # Examples
    ///
    /// ```bash
    /// sitemint config
    /// sitemint --credentials /etc/sitemint/.env config
    /// ```
    Config,

    /// Generate site content and publish it to the backend.
    ///
    /// Prompts for the site plan (site name, theme type, description,
    /// page titles, categories, posts per category), generates one page
    /// per title and one batch of posts per category, then pushes
    /// everything to the backend with `published` status.
    ///
    /// # Examples
    ///
    /// ```bash
    /// sitemint create
    /// sitemint --format json create
    /// ```
    Create,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = match resolve_format(&cli.format) {
        Ok(format) => format,
        Err(code) => std::process::exit(code.as_i32()),
    };

    let credentials_path = cli
        .credentials
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE));

    let exit_code = execute_command(cli.command, &credentials_path, output_format).await?;

    std::process::exit(exit_code.as_i32());
}

/// Resolves the `--format` argument, reporting a bad value as invalid
/// input rather than a generic failure.
fn resolve_format(raw: &str) -> std::result::Result<OutputFormat, ExitCode> {
    raw.parse::<OutputFormat>().map_err(|e| {
        eprintln!("Error: {e}");
        ExitCode::INVALID_INPUT
    })
}

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on the verbosity
/// flag, writing to stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Executes the specified CLI command.
///
/// No subcommand means `create`, preserving the original tool's default.
///
/// # Errors
///
/// Returns an error if command execution fails in a way the command
/// itself could not map to an exit code.
async fn execute_command(
    command: Option<Commands>,
    credentials_path: &std::path::Path,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command.unwrap_or(Commands::Create) {
        Commands::Config => commands::config::run(credentials_path, output_format).await,
        Commands::Create => commands::create::run(credentials_path, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["sitemint", "config"]);
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn test_cli_parsing_create() {
        let cli = Cli::parse_from(["sitemint", "create"]);
        assert!(matches!(cli.command, Some(Commands::Create)));
    }

    #[test]
    fn test_cli_no_subcommand_defaults_to_create() {
        let cli = Cli::parse_from(["sitemint"]);
        assert!(cli.command.is_none());
        // execute_command treats None as Create; verified by the match arm.
    }

    #[test]
    fn test_cli_unknown_subcommand_is_an_error() {
        let result = Cli::try_parse_from(["sitemint", "destroy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["sitemint", "--verbose", "create"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_format_default_and_custom() {
        let cli = Cli::parse_from(["sitemint", "create"]);
        assert_eq!(cli.format, "pretty");

        let cli = Cli::parse_from(["sitemint", "--format", "json", "create"]);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_credentials_override() {
        let cli = Cli::parse_from(["sitemint", "--credentials", "/tmp/creds.env", "config"]);
        assert_eq!(cli.credentials, Some(PathBuf::from("/tmp/creds.env")));
    }

    #[test]
    fn test_output_format_parsing() {
        let format: OutputFormat = "json".parse().unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert!("invalid".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_bad_format_maps_to_invalid_input_exit_code() {
        assert_eq!(resolve_format("pretty").unwrap(), OutputFormat::Pretty);
        assert_eq!(resolve_format("yaml").unwrap_err(), ExitCode::INVALID_INPUT);
    }
}
