//! The sequential content-generation pipeline.
//!
//! Walks a [`SitePlan`] and produces a [`SiteContent`]: one generation
//! exchange per page, one title batch per category, then one exchange per
//! post. Every remote call is awaited before the next begins.
//!
//! Failure policy per item:
//! - A failed page generation is logged and the page skipped.
//! - A failed title batch degrades to zero posts for that category.
//! - A failed post generation is logged and the post skipped.
//!
//! No step ever produces a partially-filled entity; failures surface as
//! `Err` and are handled here, not papered over with defaults.

use crate::{extract, prompts};
use sitemint_core::traits::TextGenerator;
use sitemint_core::{Category, Error, Page, Post, Result, SiteContent, SitePlan};
use tracing::{debug, warn};

/// Title and body extracted from one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    /// Title from the completion's first `<h1>` ("Untitled" if absent)
    pub title: String,
    /// Allow-listed HTML fragment
    pub content: String,
}

/// Generates one piece of content from a single prompt exchange.
///
/// The title comes from the completion's `<h1>`; the body is the
/// allow-listed fragment. An empty extracted body is an explicit failure:
/// downstream consumers require fully-formed entities.
///
/// # Errors
///
/// Returns an error if the generation request fails or the completion
/// yields an empty fragment.
pub async fn generate_content(
    generator: &dyn TextGenerator,
    prompt: &str,
    label: &str,
) -> Result<GeneratedContent> {
    let completion = generator.complete(prompt, label).await?;

    let title = extract::extract_title(&completion);
    let content = extract::extract_fragment(&completion);

    if content.trim().is_empty() {
        return Err(Error::EmptyCompletion {
            label: label.to_string(),
        });
    }

    debug!(label, title, "Generated content");
    Ok(GeneratedContent { title, content })
}

/// Generates post titles for a category.
///
/// Splits the completion into lines, drops blank lines, takes the first
/// `count`, and cleans each (numbering prefix and wrapping quotes
/// stripped).
///
/// # Errors
///
/// Returns an error if the generation request fails; the caller decides
/// whether that is fatal (the pipeline degrades it to an empty batch).
pub async fn generate_post_titles(
    generator: &dyn TextGenerator,
    prompt: &str,
    count: usize,
    label: &str,
) -> Result<Vec<String>> {
    let completion = generator.complete(prompt, label).await?;

    let titles: Vec<String> = completion
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(count)
        .map(extract::clean_title)
        .filter(|title| !title.is_empty())
        .collect();

    debug!(label, count = titles.len(), "Generated post titles");
    Ok(titles)
}

/// Generates a post keyed to an already-known title.
///
/// The returned post carries the caller-supplied title, not the `<h1>`
/// the model happened to produce.
///
/// # Errors
///
/// Returns an error if the generation request fails or yields an empty
/// fragment; the failure is explicit — there is no null to trip over.
pub async fn generate_post(
    generator: &dyn TextGenerator,
    title: &str,
    prompt: &str,
) -> Result<Post> {
    let generated = generate_content(generator, prompt, title).await?;
    Post::new(title, generated.content)
}

/// Runs the whole generation pipeline for a plan.
///
/// Produces pages in plan order, then per category a title batch followed
/// by one post per title. `progress` receives a human-readable status
/// message before each remote exchange (the CLI wires it to a spinner).
///
/// Individual failures are logged and skipped per the module-level policy;
/// the pipeline itself always runs to completion.
pub async fn build_site(
    generator: &dyn TextGenerator,
    plan: &SitePlan,
    mut progress: impl FnMut(String) + Send,
) -> SiteContent {
    let mut content = SiteContent::default();

    for page_title in &plan.page_titles {
        progress(format!("Generating page: {page_title}"));
        let prompt = prompts::page_prompt(plan, page_title);
        match generate_content(generator, &prompt, page_title).await {
            Ok(generated) => match Page::new(generated.title, generated.content) {
                Ok(page) => content.pages.push(page),
                Err(e) => warn!("Skipping page '{page_title}': {e}"),
            },
            Err(e) => warn!("Skipping page '{page_title}': {e}"),
        }
    }

    for category_name in &plan.category_names {
        progress(format!("Generating post titles for: {category_name}"));
        let titles_prompt = prompts::post_titles_prompt(plan, category_name);
        let titles = match generate_post_titles(
            generator,
            &titles_prompt,
            plan.posts_per_category,
            category_name,
        )
        .await
        {
            Ok(titles) => titles,
            Err(e) => {
                warn!("Title generation failed for '{category_name}', continuing with zero posts: {e}");
                Vec::new()
            }
        };

        let mut posts = Vec::new();
        for title in &titles {
            progress(format!("Generating post: {title}"));
            let prompt = prompts::post_content_prompt(plan, title);
            match generate_post(generator, title, &prompt).await {
                Ok(post) => posts.push(post),
                Err(e) => warn!("Skipping post '{title}': {e}"),
            }
        }

        content.categories.push(Category::new(category_name, posts));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Generator stub returning one canned completion per call, in order.
    struct StubGenerator {
        completions: Mutex<Vec<Result<String>>>,
    }

    impl StubGenerator {
        fn new(completions: Vec<Result<String>>) -> Self {
            Self {
                completions: Mutex::new(completions),
            }
        }

        /// Echoes the same completion for every call.
        fn echo(completion: &str, calls: usize) -> Self {
            Self::new((0..calls).map(|_| Ok(completion.to_string())).collect())
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn complete(&self, _prompt: &str, label: &str) -> Result<String> {
            let mut completions = self.completions.lock().unwrap();
            if completions.is_empty() {
                return Err(Error::EmptyCompletion {
                    label: label.to_string(),
                });
            }
            completions.remove(0)
        }
    }

    fn plan(pages: &[&str], categories: &[&str], posts_per_category: usize) -> SitePlan {
        SitePlan {
            site_name: "Test Site".to_string(),
            theme_type: "blog".to_string(),
            description: "a test site".to_string(),
            page_titles: pages.iter().map(ToString::to_string).collect(),
            category_names: categories.iter().map(ToString::to_string).collect(),
            posts_per_category,
        }
    }

    #[tokio::test]
    async fn test_generate_content_extracts_title_and_body() {
        let stub = StubGenerator::echo("<h1>Title</h1><p>Body</p>", 1);
        let generated = generate_content(&stub, "prompt", "About").await.unwrap();
        assert_eq!(generated.title, "Title");
        assert_eq!(generated.content, "<p>Body</p>");
    }

    #[tokio::test]
    async fn test_generate_content_empty_fragment_is_error() {
        let stub = StubGenerator::echo("<h1>Title only</h1>", 1);
        let err = generate_content(&stub, "prompt", "About").await.unwrap_err();
        assert!(err.is_generation_failed());
    }

    #[tokio::test]
    async fn test_generate_post_titles_takes_first_count_cleaned() {
        let completion = "1. \"Alpha\"\n2) Beta\n3. Gamma\n4. Delta\n5. Epsilon";
        let stub = StubGenerator::echo(completion, 1);
        let titles = generate_post_titles(&stub, "prompt", 3, "SEO").await.unwrap();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[tokio::test]
    async fn test_generate_post_titles_skips_blank_lines() {
        let completion = "1. One\n\n2. Two\n\n3. Three\n";
        let stub = StubGenerator::echo(completion, 1);
        let titles = generate_post_titles(&stub, "prompt", 2, "SEO").await.unwrap();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn test_generate_post_keeps_caller_title() {
        let stub = StubGenerator::echo("<h1>Model Title</h1><p>Body</p>", 1);
        let post = generate_post(&stub, "My Title", "prompt").await.unwrap();
        assert_eq!(post.title, "My Title");
        assert_eq!(post.content, "<p>Body</p>");
    }

    #[tokio::test]
    async fn test_generate_post_propagates_failure() {
        let stub = StubGenerator::new(vec![Err(Error::EmptyCompletion {
            label: "x".to_string(),
        })]);
        assert!(generate_post(&stub, "My Title", "prompt").await.is_err());
    }

    #[tokio::test]
    async fn test_build_site_end_to_end_counts() {
        // 2 pages + 1 title batch + 2 posts = 5 exchanges.
        let stub = StubGenerator::new(vec![
            Ok("<h1>About</h1><p>About body</p>".to_string()),
            Ok("<h1>Contact</h1><p>Contact body</p>".to_string()),
            Ok("1. First Post\n2. Second Post".to_string()),
            Ok("<h1>Ignored</h1><p>Post one body</p>".to_string()),
            Ok("<h1>Ignored</h1><p>Post two body</p>".to_string()),
        ]);
        let plan = plan(&["About", "Contact"], &["News"], 2);

        let content = build_site(&stub, &plan, |_| {}).await;

        assert_eq!(content.pages.len(), 2);
        assert_eq!(content.categories.len(), 1);
        assert_eq!(content.categories[0].name, "News");
        assert_eq!(content.categories[0].posts.len(), 2);
        assert_eq!(content.categories[0].posts[0].title, "First Post");
        assert_eq!(content.categories[0].posts[1].title, "Second Post");
        for page in &content.pages {
            assert!(!page.title.is_empty());
            assert!(!page.content.is_empty());
        }
    }

    #[tokio::test]
    async fn test_build_site_skips_failed_page() {
        let stub = StubGenerator::new(vec![
            Err(Error::EmptyCompletion {
                label: "About".to_string(),
            }),
            Ok("<h1>Contact</h1><p>Body</p>".to_string()),
        ]);
        let plan = plan(&["About", "Contact"], &[], 0);

        let content = build_site(&stub, &plan, |_| {}).await;

        assert_eq!(content.pages.len(), 1);
        assert_eq!(content.pages[0].title, "Contact");
    }

    #[tokio::test]
    async fn test_build_site_failed_title_batch_yields_empty_category() {
        let stub = StubGenerator::new(vec![Err(Error::EmptyCompletion {
            label: "News".to_string(),
        })]);
        let plan = plan(&[], &["News"], 3);

        let content = build_site(&stub, &plan, |_| {}).await;

        assert_eq!(content.categories.len(), 1);
        assert!(content.categories[0].posts.is_empty());
    }

    #[tokio::test]
    async fn test_build_site_reports_progress() {
        let stub = StubGenerator::echo("<h1>T</h1><p>B</p>", 1);
        let plan = plan(&["About"], &[], 0);

        let mut messages = Vec::new();
        let _ = build_site(&stub, &plan, |msg| messages.push(msg)).await;

        assert_eq!(messages, vec!["Generating page: About"]);
    }
}
