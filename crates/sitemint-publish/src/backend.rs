//! HTTP client for the content backend's admin API.
//!
//! Issues authenticated requests to create page and post entities. All
//! entities are created with the fixed `published` status and HTML source
//! bodies; there is no draft workflow.
//!
//! # Examples
//!
//! ```no_run
//! use sitemint_core::{Credentials, Page, traits::ContentBackend};
//! use sitemint_publish::BackendClient;
//!
//! # async fn example(credentials: &Credentials) -> sitemint_core::Result<()> {
//! let backend = BackendClient::new(credentials);
//! let page = Page::new("About", "<p>Hello</p>")?;
//! backend.create_page(&page).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use sitemint_core::traits::ContentBackend;
use sitemint_core::{Credentials, Error, Page, Post, PostTag, Result};
use tracing::debug;

/// Status sent with every created entity.
const PUBLISHED_STATUS: &str = "published";

/// Page-creation request body.
#[derive(Debug, Serialize)]
struct PageRequest<'a> {
    title: &'a str,
    html: &'a str,
    status: &'static str,
}

/// Post-creation request body.
#[derive(Debug, Serialize)]
struct PostRequest<'a> {
    title: &'a str,
    html: &'a str,
    tags: Vec<TagRequest<'a>>,
    status: &'static str,
}

/// Inline tag in a post-creation request.
#[derive(Debug, Serialize)]
struct TagRequest<'a> {
    name: &'a str,
    description: &'a str,
}

/// Content-backend admin-API client.
///
/// Constructed from injected [`Credentials`]; requests carry the admin
/// key as a bearer token. One request per entity, sequentially.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    admin_key: String,
}

impl BackendClient {
    /// Creates a client from the persisted credentials.
    ///
    /// A trailing slash on the backend URL is tolerated.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: credentials.backend_url.trim_end_matches('/').to_string(),
            admin_key: credentials.backend_admin_key.clone(),
        }
    }

    /// Sends one entity-creation request.
    async fn create_entity<T: Serialize + Sync>(&self, path: &str, entity: &str, body: &T) -> Result<()> {
        debug!(entity, "Creating backend entity");

        self.client
            .post(format!("{}/api/admin/{path}/?source=html", self.base_url))
            .bearer_auth(&self.admin_key)
            .json(body)
            .send()
            .await
            .map_err(|e| publish_failed(entity, e))?
            .error_for_status()
            .map_err(|e| publish_failed(entity, e))?;

        Ok(())
    }
}

#[async_trait]
impl ContentBackend for BackendClient {
    async fn create_page(&self, page: &Page) -> Result<()> {
        let body = PageRequest {
            title: &page.title,
            html: &page.content,
            status: PUBLISHED_STATUS,
        };
        self.create_entity("pages", &format!("page '{}'", page.title), &body)
            .await
    }

    async fn create_post(&self, post: &Post, tag: &PostTag) -> Result<()> {
        let body = PostRequest {
            title: &post.title,
            html: &post.content,
            tags: vec![TagRequest {
                name: &tag.name,
                description: &tag.description,
            }],
            status: PUBLISHED_STATUS,
        };
        self.create_entity("posts", &format!("post '{}'", post.title), &body)
            .await
    }
}

fn publish_failed(entity: &str, source: reqwest::Error) -> Error {
    Error::PublishFailed {
        entity: entity.to_string(),
        source: Box::new(source),
    }
}
