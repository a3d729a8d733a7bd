//! The sequential publisher.
//!
//! Takes a [`SiteContent`] and issues one create request per page and per
//! post against a [`ContentBackend`], in order, one at a time. Each
//! request runs through the configured [`RetryPolicy`]; what happens when
//! the budget is exhausted is an explicit [`FailurePolicy`], never a
//! silent partial success.

use crate::RetryPolicy;
use serde::Serialize;
use sitemint_core::traits::ContentBackend;
use sitemint_core::{Error, SiteContent};
use std::fmt;
use tracing::{error, info};

/// What to do when a single push fails after retries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the remaining pushes (the original behavior).
    #[default]
    Halt,
    /// Log the failure and continue with the next entity.
    Skip,
}

/// A single failed push, as recorded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishFailure {
    /// Description of the entity (e.g. `page 'About'`)
    pub entity: String,
    /// Human-readable failure message
    pub message: String,
}

/// Outcome of a publish run.
///
/// Always returned, even on abort, so callers can report exactly what was
/// created before things went wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    /// Pages successfully created
    pub pages_created: usize,
    /// Posts successfully created
    pub posts_created: usize,
    /// Entities skipped under [`FailurePolicy::Skip`]
    pub skipped: Vec<PublishFailure>,
    /// The failure that aborted the run under [`FailurePolicy::Halt`]
    pub aborted: Option<PublishFailure>,
}

impl PublishReport {
    /// Returns `true` if every entity was pushed successfully.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.aborted.is_none()
    }
}

/// Sequential publisher over a [`ContentBackend`].
///
/// # Examples
///
/// ```no_run
/// use sitemint_core::{Credentials, SiteContent};
/// use sitemint_publish::{BackendClient, FailurePolicy, Publisher, RetryPolicy};
/// use std::time::Duration;
///
/// # async fn example(credentials: &Credentials, content: &SiteContent) {
/// let backend = BackendClient::new(credentials);
/// let publisher = Publisher::new(&backend)
///     .with_retry_policy(RetryPolicy::new(3, Duration::from_millis(500)))
///     .with_failure_policy(FailurePolicy::Halt);
///
/// let report = publisher.publish(content, |msg| eprintln!("{msg}")).await;
/// println!("{} pages, {} posts", report.pages_created, report.posts_created);
/// # }
/// ```
pub struct Publisher<'a> {
    backend: &'a dyn ContentBackend,
    retry: RetryPolicy,
    failure_policy: FailurePolicy,
}

impl<'a> Publisher<'a> {
    /// Creates a publisher with the default single-try, halt-on-failure
    /// behavior.
    #[must_use]
    pub fn new(backend: &'a dyn ContentBackend) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Sets the retry policy applied to every request.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Publishes all pages, then all categories' posts, sequentially.
    ///
    /// `progress` receives a human-readable status message before each
    /// push. The returned report is exact: counts of what was created,
    /// what was skipped, and whether (and where) the run aborted.
    pub async fn publish(
        &self,
        content: &SiteContent,
        mut progress: impl FnMut(String) + Send,
    ) -> PublishReport {
        let mut report = PublishReport::default();

        for page in &content.pages {
            progress(format!("Pushing page: {}", page.title));
            let entity = format!("page '{}'", page.title);
            let result = self.retry.run(|| self.backend.create_page(page)).await;
            match result {
                Ok(()) => report.pages_created += 1,
                Err(e) => {
                    if self.record_failure(&mut report, &entity, &e) {
                        return report;
                    }
                }
            }
        }

        for category in &content.categories {
            progress(format!("Pushing category: {}", category.name));
            let tag = category.tag();
            for post in &category.posts {
                progress(format!("Pushing post: {}", post.title));
                let entity = format!("post '{}'", post.title);
                let result = self
                    .retry
                    .run(|| self.backend.create_post(post, &tag))
                    .await;
                match result {
                    Ok(()) => report.posts_created += 1,
                    Err(e) => {
                        if self.record_failure(&mut report, &entity, &e) {
                            return report;
                        }
                    }
                }
            }
        }

        info!(
            pages = report.pages_created,
            posts = report.posts_created,
            "Publish run finished"
        );
        report
    }

    /// Records a failure per the policy. Returns `true` when the run must
    /// abort.
    fn record_failure(&self, report: &mut PublishReport, entity: &str, e: &Error) -> bool {
        let failure = PublishFailure {
            entity: entity.to_string(),
            message: e.to_string(),
        };
        match self.failure_policy {
            FailurePolicy::Halt => {
                error!("Aborting publish run at {entity}: {e}");
                report.aborted = Some(failure);
                true
            }
            FailurePolicy::Skip => {
                error!("Skipping {entity}: {e}");
                report.skipped.push(failure);
                false
            }
        }
    }
}

impl fmt::Debug for Publisher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("retry", &self.retry)
            .field("failure_policy", &self.failure_policy)
            .finish_non_exhaustive()
    }
}
