//! Persisted credentials for the two remote APIs.
//!
//! Stored as flat `KEY=value` lines in a local text file (default `.env`
//! in the working directory):
//!
//! ```text
//! BACKEND_URL=http://localhost:2368
//! BACKEND_ADMIN_KEY=1234567890
//! GENERATION_API_KEY=sk-1234567890
//! ```
//!
//! Saving overwrites the file wholesale; there is no merge or backup.
//! Validation is presence-only: a key must exist, its value is free-form.

use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default credentials file name, resolved against the working directory.
pub const DEFAULT_CREDENTIALS_FILE: &str = ".env";

const KEY_BACKEND_URL: &str = "BACKEND_URL";
const KEY_BACKEND_ADMIN_KEY: &str = "BACKEND_ADMIN_KEY";
const KEY_GENERATION_API_KEY: &str = "GENERATION_API_KEY";

/// Credentials for the content backend and the generation API.
///
/// Constructed either interactively (the `config` command) or by loading
/// the persisted file. Components that need remote access receive this
/// struct explicitly; there is no ambient global configuration.
///
/// # Examples
///
/// ```
/// use sitemint_core::Credentials;
///
/// let creds = Credentials {
///     backend_url: "http://localhost:2368".to_string(),
///     backend_admin_key: "1234567890".to_string(),
///     generation_api_key: "sk-1234567890".to_string(),
/// };
/// assert!(creds.to_file_string().contains("BACKEND_URL="));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Base URL of the content backend, including protocol
    pub backend_url: String,
    /// Admin API key for the content backend
    pub backend_admin_key: String,
    /// API key for the text-generation service
    pub generation_api_key: String,
}

impl Credentials {
    /// Loads credentials from a `KEY=value` file.
    ///
    /// Blank lines and lines starting with `#` are ignored. Unknown keys
    /// are ignored as well, so the file can carry unrelated environment
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or one of
    /// the three required keys is missing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read credentials file '{}': {e} (run `sitemint config` first)",
                path.display()
            ))
        })?;

        let parsed = Self::parse(&content)?;
        debug!("Loaded credentials from {}", path.display());
        Ok(parsed)
    }

    /// Parses credentials from `KEY=value` text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a required key is missing.
    pub fn parse(content: &str) -> Result<Self> {
        let mut backend_url = None;
        let mut backend_admin_key = None;
        let mut generation_api_key = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim() {
                KEY_BACKEND_URL => backend_url = Some(value),
                KEY_BACKEND_ADMIN_KEY => backend_admin_key = Some(value),
                KEY_GENERATION_API_KEY => generation_api_key = Some(value),
                _ => {}
            }
        }

        let require = |key: &str, value: Option<String>| {
            value.ok_or_else(|| Error::config(format!("missing required key '{key}'")))
        };

        Ok(Self {
            backend_url: require(KEY_BACKEND_URL, backend_url)?,
            backend_admin_key: require(KEY_BACKEND_ADMIN_KEY, backend_admin_key)?,
            generation_api_key: require(KEY_GENERATION_API_KEY, generation_api_key)?,
        })
    }

    /// Saves credentials to `path`, overwriting any existing file.
    ///
    /// The write is a single `fs::write` of the whole rendered content;
    /// on failure the previous file may be left untouched, but a partial
    /// mix of old and new keys is never produced line by line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_file_string()).map_err(|e| {
            Error::config(format!(
                "failed to write credentials file '{}': {e}",
                path.display()
            ))
        })?;
        debug!("Saved credentials to {}", path.display());
        Ok(())
    }

    /// Renders the credentials in persisted `KEY=value` form.
    #[must_use]
    pub fn to_file_string(&self) -> String {
        format!(
            "{KEY_BACKEND_URL}={}\n{KEY_BACKEND_ADMIN_KEY}={}\n{KEY_GENERATION_API_KEY}={}\n",
            self.backend_url, self.backend_admin_key, self.generation_api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Credentials {
        Credentials {
            backend_url: "http://localhost:2368".to_string(),
            backend_admin_key: "1234567890".to_string(),
            generation_api_key: "sk-1234567890".to_string(),
        }
    }

    #[test]
    fn test_file_string_has_exactly_three_lines() {
        let rendered = sample().to_file_string();
        let lines: Vec<&str> = rendered.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "BACKEND_URL=http://localhost:2368");
        assert_eq!(lines[1], "BACKEND_ADMIN_KEY=1234567890");
        assert_eq!(lines[2], "GENERATION_API_KEY=sk-1234567890");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        let creds = sample();
        creds.save(&path).unwrap();

        let loaded = Credentials::load(&path).unwrap();
        assert_eq!(loaded, creds);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "BACKEND_URL=old\nOTHER=stale\n").unwrap();

        sample().save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("BACKEND_URL=http://localhost:2368"));
    }

    #[test]
    fn test_parse_ignores_comments_and_unknown_keys() {
        let content = "\
# local credentials
BACKEND_URL=http://example.com

BACKEND_ADMIN_KEY=abc
UNRELATED=whatever
GENERATION_API_KEY=sk-x
";
        let creds = Credentials::parse(content).unwrap();
        assert_eq!(creds.backend_url, "http://example.com");
        assert_eq!(creds.backend_admin_key, "abc");
        assert_eq!(creds.generation_api_key, "sk-x");
    }

    #[test]
    fn test_parse_missing_key_is_config_error() {
        let err = Credentials::parse("BACKEND_URL=http://example.com\n").unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("BACKEND_ADMIN_KEY"));
    }

    #[test]
    fn test_load_missing_file_mentions_config_command() {
        let dir = TempDir::new().unwrap();
        let err = Credentials::load(&dir.path().join(".env")).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("sitemint config"));
    }
}
