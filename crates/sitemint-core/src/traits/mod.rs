//! Core traits for sitemint.
//!
//! This module defines the seams between the orchestration pipeline and the
//! two remote services, so the pipeline and publisher can be exercised
//! against in-memory fakes in tests.
//!
//! # Module Structure
//!
//! - `generator` - Text-generation seam
//! - `backend` - Content-backend seam
//!
//! # Examples
//!
//! ```
//! use sitemint_core::traits::TextGenerator;
//! use sitemint_core::Result;
//! use async_trait::async_trait;
//!
//! struct EchoGenerator;
//!
//! #[async_trait]
//! impl TextGenerator for EchoGenerator {
//!     async fn complete(&self, prompt: &str, label: &str) -> Result<String> {
//!         let _ = label;
//!         Ok(prompt.to_string())
//!     }
//! }
//! ```

mod backend;
mod generator;

pub use backend::ContentBackend;
pub use generator::TextGenerator;
