//! # Retry Policy
//!
//! How often the HTTP oracle repeats a version lookup whose request never
//! got an answer. Only the send is retried: an HTTP status or an undecodable
//! body is a real answer and goes straight back to the workflow.
//!
//! The delay doubles after each failed attempt. With the defaults a lookup
//! is tried four times, waiting 200 ms, 400 ms and 800 ms in between.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry, in milliseconds.
pub const DEFAULT_RETRY_BASE_MS: u64 = 200;

/// Backoff schedule for version lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. Zero disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry; each later retry waits twice as long.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// A policy that tries exactly once.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `retry` (zero-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }

    /// Run `attempt` until it succeeds or the retries are spent. Returns the
    /// last error when every attempt fails.
    pub(crate) async fn run<T, E, F, Fut>(&self, code: &str, mut attempt: F) -> Result<T, E>
    where
        E: Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut retry = 0;
        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(e) if retry < self.max_retries => {
                    let delay = self.delay_for(retry);
                    retry += 1;
                    tracing::warn!(
                        code,
                        retry,
                        max_retries = self.max_retries,
                        delay = ?delay,
                        error = %e,
                        "version lookup got no answer, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[test]
    fn default_schedule_doubles_from_200ms() {
        let policy = RetryPolicy::default();
        let delays: Vec<_> = (0..policy.max_retries).map(|r| policy.delay_for(r)).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(800),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_retries_wait_the_full_schedule() {
        let attempts = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<(), &str> = RetryPolicy::default()
            .run("C1", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err("connection refused") }
            })
            .await;

        assert_eq!(result, Err("connection refused"));
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        assert_eq!(started.elapsed(), Duration::from_millis(1400));
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_the_first_answer() {
        let attempts = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<u32, &str> = RetryPolicy::default()
            .run("C2", || {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err("timed out")
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result, Ok(2));
        assert_eq!(started.elapsed(), Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn none_tries_once() {
        let attempts = AtomicU32::new(0);
        let result: Result<(), &str> = RetryPolicy::none()
            .run("C3", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err("down") }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
