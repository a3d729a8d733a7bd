//! Sitemint CLI library.
//!
//! Exposes the command implementations and output formatters so they can
//! be exercised by integration tests; the binary in `main.rs` is a thin
//! argument-parsing wrapper around these modules.

// Command handlers share an async signature even when they never await.
#![allow(clippy::unused_async)]
#![allow(clippy::format_push_string)]

pub mod commands;
pub mod formatters;
