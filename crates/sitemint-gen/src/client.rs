//! HTTP client for the text-generation API.
//!
//! Sends a single free-text prompt plus a model identifier to a
//! chat-completion endpoint and returns the completion text. The client is
//! constructed from injected [`Credentials`]; there is no ambient global
//! client.
//!
//! # Examples
//!
//! ```no_run
//! use sitemint_core::{Credentials, traits::TextGenerator};
//! use sitemint_gen::GenerationClient;
//!
//! # async fn example(credentials: &Credentials) -> sitemint_core::Result<()> {
//! let client = GenerationClient::new(credentials);
//! let completion = client.complete("Write a haiku about tea.", "haiku").await?;
//! println!("{completion}");
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sitemint_core::traits::TextGenerator;
use sitemint_core::{Credentials, Error, Result};
use tracing::debug;

/// Default chat-completion API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Chat-completion request body.
#[derive(Debug, Serialize)]
struct CompletionRequest {
    /// Model identifier (e.g. "gpt-3.5-turbo")
    model: String,
    /// Conversation messages; always a single user message here
    messages: Vec<Message>,
}

/// Message in chat-completion format.
#[derive(Debug, Serialize)]
struct Message {
    /// Role: always "user"
    role: String,
    /// Prompt text
    content: String,
}

/// Chat-completion response wrapper.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    /// Completion choices; the first one is used
    choices: Vec<Choice>,
}

/// Single completion choice.
#[derive(Debug, Deserialize)]
struct Choice {
    /// The completion message
    message: ChoiceMessage,
}

/// Message inside a completion choice.
#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    /// Completion text
    content: String,
}

/// Text-generation API client.
///
/// Requests one completion per prompt, sequentially; there is no batching
/// or parallelism.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GenerationClient {
    /// Creates a client from the persisted credentials.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: credentials.generation_api_key.clone(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL (used by tests and self-hosted gateways).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sends one completion request and returns the raw completion text.
    async fn request_completion(&self, prompt: &str, label: &str) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        debug!(model = %self.model, label, "Requesting completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| generation_failed(label, e))?
            .error_for_status()
            .map_err(|e| generation_failed(label, e))?;

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| generation_failed(label, e))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::EmptyCompletion {
                label: label.to_string(),
            });
        }

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    async fn complete(&self, prompt: &str, label: &str) -> Result<String> {
        self.request_completion(prompt, label).await
    }
}

fn generation_failed(label: &str, source: reqwest::Error) -> Error {
    Error::GenerationFailed {
        label: label.to_string(),
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            backend_url: "http://localhost:2368".to_string(),
            backend_admin_key: "key".to_string(),
            generation_api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_client_defaults() {
        let client = GenerationClient::new(&credentials());
        assert_eq!(client.api_base, DEFAULT_API_BASE);
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.api_key, "sk-test");
    }

    #[test]
    fn test_client_builders() {
        let client = GenerationClient::new(&credentials())
            .with_model("gpt-4o-mini")
            .with_api_base("http://localhost:8080/v1");
        assert_eq!(client.model, "gpt-4o-mini");
        assert_eq!(client.api_base, "http://localhost:8080/v1");
    }

    #[test]
    fn test_request_serialization() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-3.5-turbo\""));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"<h1>Hi</h1>"}}]}"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content, "<h1>Hi</h1>");
    }
}
