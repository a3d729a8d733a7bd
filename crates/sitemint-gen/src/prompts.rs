//! Prompt templates for the generation API.
//!
//! Deterministic string templates combining the site plan with per-item
//! context. The wording steers the model toward engaging, high-school
//! reading-level HTML fragments that open with a single `<h1>` followed
//! directly by `<p>`; it is a template, not a contract, and can be tuned
//! without touching the pipeline.

use sitemint_core::SitePlan;

/// Builds the prompt for a static page.
#[must_use]
pub fn page_prompt(plan: &SitePlan, page_title: &str) -> String {
    format!(
        "Write content for {site}, a {theme} site, specifically for a {page} page \
         related to: {description}. The goal is to write content that is relevant to \
         the theme of the site and the page. The content should be written in a way \
         that is engaging and informative. The reading level should be at a high \
         school level. The structure and content of the page should be similar to \
         other {page} pages on the web, keeping in mind the theme of the site. The \
         content should be returned as html, which can then be inserted into a CMS \
         (e.g. wrap the title in an <h1>, then start directly with a <p> tag).",
        site = plan.site_name,
        theme = plan.theme_type,
        page = page_title,
        description = plan.description,
    )
}

/// Builds the prompt requesting a batch of post titles for a category.
#[must_use]
pub fn post_titles_prompt(plan: &SitePlan, category: &str) -> String {
    format!(
        "Provide {count} unique blog post titles related to {category}. The titles \
         should be relevant to the theme: {description}, yet not mention the site \
         name {site}. The titles should be written in a way that is engaging and \
         informative. The reading level should be at a high school level.",
        count = plan.posts_per_category,
        category = category,
        description = plan.description,
        site = plan.site_name,
    )
}

/// Builds the prompt for a single post with a known title.
#[must_use]
pub fn post_content_prompt(plan: &SitePlan, post_title: &str) -> String {
    format!(
        "Write content for {site}, a {theme} site, specifically for a blog post \
         titled: {title}. The goal is to write content that is relevant to the theme \
         of the site and the blog post. The content should be written in a way that \
         is engaging and informative. The reading level should be at a high school \
         level. The structure and content of the blog post should be similar to \
         other blog posts on the web, keeping in mind the theme of the site. The \
         content should be returned as html, which can then be inserted into a CMS \
         (e.g. wrap the title in an <h1>, then start directly with a <p> tag).",
        site = plan.site_name,
        theme = plan.theme_type,
        title = post_title,
    )
}
