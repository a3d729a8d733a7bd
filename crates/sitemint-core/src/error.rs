//! Error types for sitemint.
//!
//! This module provides the error hierarchy shared by all crates in the
//! workspace, with contextual information attached at the point of failure.
//!
//! # Examples
//!
//! ```
//! use sitemint_core::{Error, Result};
//!
//! fn check_site_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ValidationError {
//!             field: "site_name".to_string(),
//!             reason: "site name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_site_name("").unwrap_err();
//! assert!(err.is_validation_error());
//! ```

use thiserror::Error;

/// Main error type for sitemint.
///
/// All errors in the system use this type, providing consistent error
/// handling across the workspace crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when the credentials file is missing, unreadable, cannot be
    /// written, or lacks one of the required keys.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// A generation-API request failed.
    ///
    /// Covers network errors, non-success HTTP statuses, and malformed
    /// responses from the text-generation service. The label identifies
    /// which page or post was being generated.
    #[error("Content generation failed for '{label}': {source}")]
    GenerationFailed {
        /// Human-readable label of the item being generated
        label: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The generation API returned an empty completion.
    ///
    /// An empty completion cannot produce a usable title or body, so it is
    /// surfaced as an explicit failure rather than an empty entity.
    #[error("Generation API returned an empty completion for '{label}'")]
    EmptyCompletion {
        /// Human-readable label of the item being generated
        label: String,
    },

    /// A content-backend admin-API request failed.
    ///
    /// Covers network errors, authentication failures, and non-success
    /// HTTP statuses while creating pages or posts.
    #[error("Publishing failed for {entity}: {source}")]
    PublishFailed {
        /// Description of the entity being pushed (e.g. `page 'About'`)
        entity: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Validation error for domain types.
    ///
    /// Raised when constructing content entities that have specific
    /// requirements, such as non-empty titles and bodies.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a generation failure (including empty
    /// completions).
    #[must_use]
    pub const fn is_generation_failed(&self) -> bool {
        matches!(
            self,
            Self::GenerationFailed { .. } | Self::EmptyCompletion { .. }
        )
    }

    /// Returns `true` if this is a publish failure.
    #[must_use]
    pub const fn is_publish_failed(&self) -> bool {
        matches!(self, Self::PublishFailed { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Creates a configuration error from any displayable cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

/// Result type alias using the sitemint [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
