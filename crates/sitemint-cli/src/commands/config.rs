//! Config command implementation.
//!
//! Prompts for the backend URL, the backend admin key, and the
//! generation-API key, and persists them as `KEY=value` lines in the
//! credentials file. Re-running the command overwrites the file.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use dialoguer::Input;
use serde::Serialize;
use sitemint_core::cli::{ExitCode, OutputFormat};
use sitemint_core::Credentials;
use std::path::Path;

/// Result of a config run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigResult {
    /// Whether the credentials were saved
    pub success: bool,
    /// Path the credentials were written to
    pub path: String,
    /// Status message
    pub message: String,
}

/// Runs the config command.
///
/// # Errors
///
/// Returns an error if interactive input cannot be read (e.g. stdin is
/// not a terminal). Save failures are reported to the user and mapped to
/// an error exit code, not propagated.
///
/// # Examples
///
/// ```bash
/// sitemint config
/// # Enter your backend URL, including the protocol: http://localhost:2368
/// # Enter your backend Admin API key: ...
/// # Enter your generation API key: ...
/// ```
pub async fn run(credentials_path: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    println!(
        "Let's configure your environment. Answers are saved locally in '{}'; \
         run `sitemint config` again at any time to change them.",
        credentials_path.display()
    );

    let credentials = prompt_credentials()?;

    match credentials.save(credentials_path) {
        Ok(()) => {
            let result = ConfigResult {
                success: true,
                path: credentials_path.display().to_string(),
                message: "Credentials saved. Run `sitemint create` to generate content."
                    .to_string(),
            };
            println!("{}", format_output(&result, output_format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Failed to save credentials: {e}");
            Ok(ExitCode::ERROR)
        }
    }
}

/// Prompts for the three credential values, with suggested defaults.
fn prompt_credentials() -> Result<Credentials> {
    let backend_url: String = Input::new()
        .with_prompt("Enter your backend URL, including the protocol (http:// or https://)")
        .default("http://localhost:2368".to_string())
        .interact()
        .context("failed to read user input")?;

    let backend_admin_key: String = Input::new()
        .with_prompt("Enter your backend Admin API key")
        .default("1234567890".to_string())
        .interact()
        .context("failed to read user input")?;

    let generation_api_key: String = Input::new()
        .with_prompt("Enter your generation API key")
        .default("sk-1234567890".to_string())
        .interact()
        .context("failed to read user input")?;

    Ok(Credentials {
        backend_url,
        backend_admin_key,
        generation_api_key,
    })
}
