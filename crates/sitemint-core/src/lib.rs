//! Core types, traits, and errors for sitemint.
//!
//! This crate provides the foundational types and abstractions used across
//! the sitemint workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Content entities (`Page`, `Post`, `Category`) and the `SitePlan`
//! - Error hierarchy with contextual information
//! - Trait seams for text generation and the content backend
//! - Persisted credentials for the two remote APIs

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod content;
mod credentials;
mod error;

pub mod cli;
pub mod traits;

pub use content::{Category, Page, Post, PostTag, SiteContent, SitePlan};
pub use credentials::{Credentials, DEFAULT_CREDENTIALS_FILE};
pub use error::{Error, Result};
