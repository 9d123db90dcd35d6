//! Retry and timeout policy for feed requests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a request is retried.
///
/// A request is attempted up to `retries + 1` times. Responses with a
/// status in `retry_on`, and transport failures, are retried after a
/// linearly growing backoff unless the attempt was the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Extra attempts after the first.
    pub retries: u32,
    /// Base backoff in milliseconds; attempt `n` waits `backoff_ms · (n + 1)`.
    pub backoff_ms: u64,
    /// Status codes worth retrying.
    pub retry_on: Vec<u16>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 2,
            backoff_ms: 500,
            retry_on: vec![429, 500, 502, 503, 504],
            timeout_ms: 15_000,
        }
    }
}

impl RetryPolicy {
    /// A policy that tries exactly once.
    #[must_use]
    pub fn no_retries() -> Self {
        Self {
            retries: 0,
            ..Self::default()
        }
    }

    /// Whether another attempt follows `attempt` (zero-based).
    #[must_use]
    pub fn has_attempts_after(&self, attempt: u32) -> bool {
        attempt < self.retries
    }

    /// Whether a response with `status` on `attempt` should be retried.
    #[must_use]
    pub fn should_retry_status(&self, status: u16, attempt: u32) -> bool {
        self.retry_on.contains(&status) && self.has_attempts_after(attempt)
    }

    /// Delay before the attempt following `attempt`.
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.backoff_ms.saturating_mul(u64::from(attempt) + 1))
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
