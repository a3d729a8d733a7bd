//! Create command implementation.
//!
//! The full pipeline: load persisted credentials, prompt for the site
//! plan, generate pages and posts through the generation API, then push
//! everything to the content backend. Credentials come from the
//! persisted file only — it is the single source of truth, there is no
//! re-prompt for API keys here.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use sitemint_core::cli::{ExitCode, OutputFormat};
use sitemint_core::{Credentials, SitePlan};
use sitemint_gen::{GenerationClient, build_site};
use sitemint_publish::{BackendClient, Publisher, RetryPolicy};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Retry budget for backend pushes. Generation calls are not retried;
/// a failed item is skipped by the pipeline instead.
const PUBLISH_RETRY_ATTEMPTS: u32 = 3;
const PUBLISH_RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

/// Runs the create command.
///
/// # Errors
///
/// Returns an error if interactive input cannot be read. Remote failures
/// are reported to the user and mapped to exit codes, not propagated.
///
/// # Examples
///
/// ```bash
/// sitemint create
/// # What would you like to name your site? My Site
/// # What kind of theme would you like to create? blog
/// # ...
/// ```
pub async fn run(credentials_path: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let credentials = match Credentials::load(credentials_path) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    let plan = prompt_site_plan()?;
    if let Err(e) = plan.validate() {
        eprintln!("{e}");
        return Ok(ExitCode::INVALID_INPUT);
    }
    if plan.is_empty() {
        eprintln!("Nothing to create: no page titles and no posts were requested.");
        return Ok(ExitCode::INVALID_INPUT);
    }

    info!(
        pages = plan.page_titles.len(),
        categories = plan.category_names.len(),
        posts_per_category = plan.posts_per_category,
        "Starting generation"
    );

    // Generate everything up front; the publisher consumes the whole
    // structure afterwards.
    let generator = GenerationClient::new(&credentials);
    let spinner = new_spinner("Generating content...");
    let content = build_site(&generator, &plan, |msg| spinner.set_message(msg)).await;
    spinner.finish_with_message(format!(
        "Generated {} pages and {} posts",
        content.pages.len(),
        content.post_count()
    ));

    if content.pages.is_empty() && content.post_count() == 0 {
        eprintln!("Nothing was generated; check the generation API key and try again.");
        return Ok(ExitCode::REMOTE_ERROR);
    }

    let backend = BackendClient::new(&credentials);
    let publisher = Publisher::new(&backend)
        .with_retry_policy(RetryPolicy::new(PUBLISH_RETRY_ATTEMPTS, PUBLISH_RETRY_BASE_DELAY));

    let spinner = new_spinner("Pushing content to the backend...");
    let report = publisher.publish(&content, |msg| spinner.set_message(msg)).await;
    if report.is_complete() {
        spinner.finish_with_message("All content pushed successfully");
    } else {
        spinner.abandon_with_message("Publishing did not complete");
    }

    println!("{}", format_output(&report, output_format)?);

    if report.aborted.is_some() {
        Ok(ExitCode::REMOTE_ERROR)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Prompts for the site plan, with suggested defaults.
fn prompt_site_plan() -> Result<SitePlan> {
    let site_name: String = Input::new()
        .with_prompt("What would you like to name your site?")
        .default("My Site".to_string())
        .interact()
        .context("failed to read user input")?;

    let theme_type: String = Input::new()
        .with_prompt("What kind of theme would you like to create? (e.g. blog, portfolio, newsletter)")
        .default("blog".to_string())
        .interact()
        .context("failed to read user input")?;

    let description: String = Input::new()
        .with_prompt("Describe your theme in a few sentences (this steers the generated content)")
        .default(
            "This is the blog of a content marketer who writes about marketing, SEO, \
             and content repurposing."
                .to_string(),
        )
        .interact()
        .context("failed to read user input")?;

    let page_titles: String = Input::new()
        .with_prompt("Enter the titles of all the static pages you want to create (comma separated)")
        .default("About, Contact, Services".to_string())
        .interact()
        .context("failed to read user input")?;

    let category_names: String = Input::new()
        .with_prompt("Enter the titles of all the categories you want to create (comma separated)")
        .default("Marketing, SEO, Content Repurposing".to_string())
        .interact()
        .context("failed to read user input")?;

    let posts_per_category = prompt_post_count()?;

    Ok(SitePlan {
        site_name,
        theme_type,
        description,
        page_titles: parse_comma_list(&page_titles),
        category_names: parse_comma_list(&category_names),
        posts_per_category,
    })
}

/// Prompts for the per-category post count, re-prompting on invalid input.
fn prompt_post_count() -> Result<usize> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter number of posts per category (titles and content are auto-generated)")
            .default("3".to_string())
            .interact()
            .context("failed to read user input")?;

        match input.trim().parse::<usize>() {
            Ok(count) => return Ok(count),
            Err(_) => eprintln!("Please enter a whole number (e.g. 3)."),
        }
    }
}

/// Splits a comma-separated answer into trimmed, non-empty items.
fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn new_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid spinner template"),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_list_trims_and_drops_empties() {
        assert_eq!(
            parse_comma_list("About, Contact , Services"),
            vec!["About", "Contact", "Services"]
        );
        assert_eq!(parse_comma_list("One,,Two,"), vec!["One", "Two"]);
        assert!(parse_comma_list("").is_empty());
        assert!(parse_comma_list(" , ,").is_empty());
    }
}
