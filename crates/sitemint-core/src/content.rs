//! Content entities produced by generation and consumed by publishing.
//!
//! Pages and posts are validated at construction: an entity with an empty
//! title or body cannot exist, so a failed generation step has to surface
//! as an explicit `Err` instead of a half-filled value.
//!
//! # Examples
//!
//! ```
//! use sitemint_core::{Page, Category, Post};
//!
//! let page = Page::new("About", "<p>Hello</p>").unwrap();
//! assert_eq!(page.title, "About");
//!
//! let post = Post::new("First", "<p>Body</p>").unwrap();
//! let category = Category::new("Marketing", vec![post]);
//! assert_eq!(category.posts.len(), 1);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A static, non-chronological content entity (e.g. "About").
///
/// Immutable once produced by the generator; consumed exactly once by the
/// publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page title, extracted from the completion's `<h1>`
    pub title: String,
    /// HTML fragment body (allow-listed tags only)
    pub content: String,
}

impl Page {
    /// Creates a page, rejecting empty titles and bodies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the title or content is empty
    /// after trimming.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let content = content.into();
        validate_non_empty("page.title", &title)?;
        validate_non_empty("page.content", &content)?;
        Ok(Self { title, content })
    }
}

/// A chronological content entity grouped under a category.
///
/// Same shape and lifecycle as [`Page`], but produced in two steps: the
/// title is generated first, then content is generated against that title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title, supplied by the title-generation step
    pub title: String,
    /// HTML fragment body (allow-listed tags only)
    pub content: String,
}

impl Post {
    /// Creates a post, rejecting empty titles and bodies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the title or content is empty
    /// after trimming.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let content = content.into();
        validate_non_empty("post.title", &title)?;
        validate_non_empty("post.content", &content)?;
        Ok(Self { title, content })
    }
}

/// A label grouping posts; maps 1:1 to a backend tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name as entered by the user
    pub name: String,
    /// Posts in generation order
    pub posts: Vec<Post>,
}

impl Category {
    /// Creates a category with its generated posts.
    #[must_use]
    pub fn new(name: impl Into<String>, posts: Vec<Post>) -> Self {
        Self {
            name: name.into(),
            posts,
        }
    }

    /// Returns the description used when the backend tag is created.
    #[must_use]
    pub fn tag_description(&self) -> String {
        format!("This is a tag for {} posts.", self.name)
    }

    /// Returns the backend tag this category maps to.
    #[must_use]
    pub fn tag(&self) -> PostTag {
        PostTag {
            name: self.name.clone(),
            description: self.tag_description(),
        }
    }
}

/// Tag attached to a post when it is published.
///
/// The backend upserts tags by name, so attaching the same tag to every
/// post of a category creates it once and reuses it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTag {
    /// Tag name (the category name)
    pub name: String,
    /// Tag description, generated from the category name
    pub description: String,
}

/// The validated answers of an interactive `create` session.
///
/// Drives the whole generation pipeline; everything downstream is derived
/// from these fields plus the generation API's completions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePlan {
    /// Site name (used in prompts, never in generated titles)
    pub site_name: String,
    /// Kind of site (e.g. "blog", "portfolio", "newsletter")
    pub theme_type: String,
    /// Free-text description steering the generated content
    pub description: String,
    /// Titles of the static pages to create
    pub page_titles: Vec<String>,
    /// Names of the categories to create posts under
    pub category_names: Vec<String>,
    /// Number of posts to generate per category
    pub posts_per_category: usize,
}

impl SitePlan {
    /// Validates the plan before generation starts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the site name, theme type, or
    /// description is empty.
    pub fn validate(&self) -> Result<()> {
        validate_non_empty("site_name", &self.site_name)?;
        validate_non_empty("theme_type", &self.theme_type)?;
        validate_non_empty("description", &self.description)?;
        Ok(())
    }

    /// Returns `true` when the plan asks for no pages and no posts, so the
    /// pipeline would have nothing to generate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page_titles.is_empty()
            && (self.category_names.is_empty() || self.posts_per_category == 0)
    }
}

/// The in-memory output of the generation pipeline, handed to the
/// publisher as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Static pages in generation order
    pub pages: Vec<Page>,
    /// Categories with their posts, in generation order
    pub categories: Vec<Category>,
}

impl SiteContent {
    /// Total number of posts across all categories.
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.categories.iter().map(|c| c.posts.len()).sum()
    }
}

fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
