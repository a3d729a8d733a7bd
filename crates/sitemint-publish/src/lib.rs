//! Publishing for sitemint.
//!
//! Pushes generated pages and posts to the content-management backend:
//!
//! - [`backend`] - Authenticated HTTP client for the backend's admin API
//! - [`retry`] - First-class retry/backoff policy
//! - [`publisher`] - The sequential publisher with an explicit failure
//!   policy

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod backend;
pub mod publisher;
pub mod retry;

pub use backend::BackendClient;
pub use publisher::{FailurePolicy, PublishFailure, PublishReport, Publisher};
pub use retry::RetryPolicy;
