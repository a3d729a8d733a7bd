//! Text-generation trait.
//!
//! This module defines the `TextGenerator` trait, the seam between the
//! content pipeline and the text-generation API.

use crate::Result;
use async_trait::async_trait;

/// Produces a free-text completion for a prompt.
///
/// The production implementation sends the prompt to a chat-completion
/// HTTP API; tests substitute an in-memory fake that returns canned
/// completions.
///
/// All implementations must be `Send + Sync` to work with Tokio's async
/// runtime.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Requests a single completion for `prompt`.
    ///
    /// The `label` names the page or post being generated and is used in
    /// error context and progress reporting only; it never influences the
    /// completion itself.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails (network, authentication, HTTP status)
    /// - The response is malformed
    /// - The completion is empty
    async fn complete(&self, prompt: &str, label: &str) -> Result<String>;
}
