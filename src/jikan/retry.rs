//! Retry policy for per-title detail fetches.
//!
//! The default policy matches the historical pipeline behavior: retry
//! forever with a fixed 2 second delay. A bounded variant is available
//! behind explicit configuration so an unrecoverable upstream error cannot
//! hang a run.

use crate::shared::errors::AppResult;
use log::{debug, warn};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// How the delay evolves between attempts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    Fixed,
    Exponential { multiplier: f64 },
}

/// Configuration for detail-fetch retry behavior
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts; `None` retries indefinitely
    pub max_attempts: Option<u32>,
    /// Base delay between attempts
    pub delay: Duration,
    /// Fixed or exponential back-off
    pub backoff: Backoff,
    /// Cap for exponential back-off (prevents excessive waits)
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: None,
            delay: Duration::from_secs(2),
            backoff: Backoff::Fixed,
            max_delay: Duration::from_secs(120),
        }
    }
}

impl RetryPolicy {
    /// Bounded variant of the default policy
    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts.max(1)),
            ..Self::default()
        }
    }

    /// Calculate the delay before the next attempt. `attempt` is 1-based
    /// (the number of attempts that have already failed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let delay = match self.backoff {
            Backoff::Fixed => self.delay,
            Backoff::Exponential { multiplier } => {
                let factor = multiplier.powi(attempt.saturating_sub(1) as i32);
                Duration::from_millis((self.delay.as_millis() as f64 * factor) as u64)
            }
        };
        delay.min(self.max_delay)
    }

    /// Execute `operation` under this policy. Every failure is logged; when
    /// the policy is bounded, the last error is returned once attempts are
    /// exhausted.
    pub async fn run<F, Fut, T>(&self, operation_name: &str, mut operation: F) -> AppResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut failed: u32 = 0;

        loop {
            match operation().await {
                Ok(result) => {
                    if failed > 0 {
                        debug!("{} succeeded after {} retries", operation_name, failed);
                    }
                    return Ok(result);
                }
                Err(error) => {
                    failed += 1;
                    if let Some(max) = self.max_attempts {
                        if failed >= max {
                            warn!(
                                "{} failed on final attempt {} ({}), giving up",
                                operation_name, failed, error
                            );
                            return Err(error);
                        }
                    }

                    let delay = self.delay_for(failed);
                    warn!(
                        "{} failed on attempt {} ({}), retrying in {:?}",
                        operation_name, failed, error, delay
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}
