use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, warn};

use crate::error::{Error, Result};

/// Explicit retry policy: attempt ceiling plus an exponential backoff
/// schedule. Delays double per attempt until `max_delay`.
///
/// Only errors reporting [`Error::is_retryable`] are retried; anything
/// else returns to the caller on the attempt that produced it.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_secs(4),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut delay = self.base_delay;

        for attempt in 1..=self.attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.attempts => {
                    warn!("Attempt {attempt}/{} failed: {e}", self.attempts);
                    sleep(delay).await;
                    delay = (delay * 2).min(self.max_delay);
                }
                Err(e) => {
                    if e.is_retryable() {
                        error!("all {attempt} attempts failed: {e}");
                    }
                    return Err(e);
                }
            }
        }
        unreachable!("Retry loop exhausted unexpectedly")
    }
}
