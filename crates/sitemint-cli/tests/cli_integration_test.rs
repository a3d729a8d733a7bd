//! Integration tests for the generate-and-publish workflow.
//!
//! Exercises the full pipeline across crates — plan in, generated content
//! out, publish calls recorded — with in-memory fakes standing in for the
//! two remote APIs.

use async_trait::async_trait;
use sitemint_core::traits::{ContentBackend, TextGenerator};
use sitemint_core::{Credentials, Page, Post, PostTag, Result, SitePlan};
use sitemint_publish::{Publisher, RetryPolicy};
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// Generator fake: title batches get a numbered list, everything else the
/// fixed page/post completion.
struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn complete(&self, prompt: &str, _label: &str) -> Result<String> {
        if prompt.starts_with("Provide") {
            Ok("1. First Post\n2. Second Post\n3. Third Post".to_string())
        } else {
            Ok("<h1>Title</h1><p>Body</p>".to_string())
        }
    }
}

/// Backend fake recording every create call.
#[derive(Default)]
struct RecordingBackend {
    pages: Mutex<Vec<Page>>,
    posts: Mutex<Vec<(Post, PostTag)>>,
}

#[async_trait]
impl ContentBackend for RecordingBackend {
    async fn create_page(&self, page: &Page) -> Result<()> {
        self.pages.lock().unwrap().push(page.clone());
        Ok(())
    }

    async fn create_post(&self, post: &Post, tag: &PostTag) -> Result<()> {
        self.posts.lock().unwrap().push((post.clone(), tag.clone()));
        Ok(())
    }
}

fn plan() -> SitePlan {
    SitePlan {
        site_name: "Test Site".to_string(),
        theme_type: "blog".to_string(),
        description: "a test site".to_string(),
        page_titles: vec!["About".to_string(), "Contact".to_string()],
        category_names: vec!["News".to_string()],
        posts_per_category: 2,
    }
}

/// End-to-end: 2 page titles and 1 category with 2 posts yield exactly
/// 2 page-create and 2 post-create calls, each post tagged with its
/// category.
#[tokio::test]
async fn test_generate_then_publish_end_to_end() {
    let generator = EchoGenerator;
    let content = sitemint_gen::build_site(&generator, &plan(), |_| {}).await;

    assert_eq!(content.pages.len(), 2);
    assert_eq!(content.categories.len(), 1);
    assert_eq!(content.categories[0].posts.len(), 2);
    for page in &content.pages {
        assert!(!page.title.is_empty());
        assert!(!page.content.is_empty());
    }
    for post in &content.categories[0].posts {
        assert!(!post.title.is_empty());
        assert!(!post.content.is_empty());
    }

    let backend = RecordingBackend::default();
    let report = Publisher::new(&backend)
        .with_retry_policy(RetryPolicy::new(3, Duration::ZERO))
        .publish(&content, |_| {})
        .await;

    assert!(report.is_complete());
    assert_eq!(report.pages_created, 2);
    assert_eq!(report.posts_created, 2);

    let pages = backend.pages.lock().unwrap();
    assert_eq!(pages.len(), 2);

    let posts = backend.posts.lock().unwrap();
    assert_eq!(posts.len(), 2);
    for (post, tag) in posts.iter() {
        assert_eq!(tag.name, "News");
        assert_eq!(tag.description, "This is a tag for News posts.");
        assert!(post.content.contains("<p>Body</p>"));
    }
}

/// Credentials written by the config flow load back for the create flow.
#[test]
fn test_credentials_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");

    let credentials = Credentials {
        backend_url: "http://localhost:2368".to_string(),
        backend_admin_key: "admin".to_string(),
        generation_api_key: "sk-test".to_string(),
    };
    credentials.save(&path).unwrap();

    let loaded = Credentials::load(&path).unwrap();
    assert_eq!(loaded, credentials);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end().lines().count(), 3);
}

/// The post titles produced by the echo generator are cleaned of their
/// numbering before they become posts.
#[tokio::test]
async fn test_post_titles_are_cleaned() {
    let generator = EchoGenerator;
    let content = sitemint_gen::build_site(&generator, &plan(), |_| {}).await;

    let titles: Vec<&str> = content.categories[0]
        .posts
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["First Post", "Second Post"]);
}
