//! Command implementations.
//!
//! Each submodule implements one CLI subcommand and returns a semantic
//! [`sitemint_core::cli::ExitCode`]; errors are caught and reported here,
//! never propagated as panics.

pub mod config;
pub mod create;
