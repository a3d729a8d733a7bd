//! Content generation for sitemint.
//!
//! This crate turns a [`sitemint_core::SitePlan`] into publishable pages
//! and posts:
//!
//! - [`client`] - HTTP client for the chat-completion generation API
//! - [`extract`] - Pulls the title and an allow-listed HTML fragment out
//!   of untrusted completion text
//! - [`prompts`] - Deterministic prompt templates
//! - [`pipeline`] - The sequential generation pipeline

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod client;
pub mod extract;
pub mod pipeline;
pub mod prompts;

pub use client::GenerationClient;
pub use pipeline::{
    GeneratedContent, build_site, generate_content, generate_post, generate_post_titles,
};
