//! Retry/backoff policy for backend requests.
//!
//! Exposed as a first-class, testable unit rather than being buried in the
//! publish loop. The default policy makes a single attempt, i.e. no
//! retries; the publisher behaves identically with or without retries
//! enabled, it just sees fewer transient failures.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Fixed exponential-backoff retry policy.
///
/// Attempt `n` (1-based) is followed, on failure, by a delay of
/// `base_delay * 2^(n-1)` before attempt `n + 1`, up to `max_attempts`
/// total attempts.
///
/// # Examples
///
/// ```
/// use sitemint_publish::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3, Duration::from_millis(500));
/// assert_eq!(policy.delay_for(1), Duration::from_millis(500));
/// assert_eq!(policy.delay_for(2), Duration::from_millis(1000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (minimum 1)
    max_attempts: u32,
    /// Delay after the first failed attempt
    base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given attempt budget and base delay.
    ///
    /// A `max_attempts` of zero is clamped to one attempt.
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Policy that makes exactly one attempt (no retries).
    #[must_use]
    pub fn no_retries() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Returns the configured attempt budget.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the delay applied after the given 1-based failed attempt.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2_u32.saturating_pow(attempt.saturating_sub(1)))
    }

    /// Runs `op` until it succeeds or the attempt budget is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt.
    pub async fn run<T, E, Op, Fut>(&self, mut op: Op) -> Result<T, E>
    where
        E: std::fmt::Display,
        Op: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_attempts => {
                    let delay = self.delay_for(attempt);
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "Attempt failed, retrying in {delay:?}: {e}"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    /// The original single-try behavior: one attempt, no backoff.
    fn default() -> Self {
        Self::no_retries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_attempts(), 1);
    }

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let policy = RetryPolicy::new(4, Duration::from_millis(100));
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = RetryPolicy::no_retries()
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(42) }
            })
            .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::ZERO);
        let result: Result<&str, String> = policy
            .run(|| {
                let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if attempt < 3 {
                        Err(format!("transient failure {attempt}"))
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_budget_exhaustion_returns_last_error() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(2, Duration::ZERO);
        let result: Result<(), String> = policy
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("always fails".to_string()) }
            })
            .await;
        assert_eq!(result.unwrap_err(), "always fails");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
