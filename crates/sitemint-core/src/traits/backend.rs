//! Content-backend trait.
//!
//! This module defines the `ContentBackend` trait, the seam between the
//! publisher and the content-management backend's admin API.

use crate::{Page, Post, PostTag, Result};
use async_trait::async_trait;

/// Creates content entities in the content-management backend.
///
/// The production implementation issues authenticated HTTP requests to
/// the backend's admin API; tests substitute an in-memory fake that
/// records the calls it receives.
///
/// Every entity is created with the fixed `published` status; there is
/// no draft workflow or scheduling.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Creates a static page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (network, authentication,
    /// HTTP status).
    async fn create_page(&self, page: &Page) -> Result<()>;

    /// Creates a post tagged with its category's tag.
    ///
    /// The tag is sent inline with every post; the backend upserts tags
    /// by name, so the first post of a category creates the tag and later
    /// posts reuse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (network, authentication,
    /// HTTP status).
    async fn create_post(&self, post: &Post, tag: &PostTag) -> Result<()>;
}
