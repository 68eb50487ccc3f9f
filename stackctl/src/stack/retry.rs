//! Bounded-retry policy for readiness probes

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::errors::StackError;

/// A bounded, fixed-interval retry policy.
///
/// The default matches the storage readiness wait: 30 attempts, 2 seconds
/// apart. The delay runs between attempts, not after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Poll the probe until it reports ready.
    ///
    /// Returns the 1-based attempt number that succeeded, or
    /// `ReadinessTimeout` once all attempts are exhausted.
    pub async fn wait_until<F, Fut>(&self, mut probe: F) -> Result<u32, StackError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        for attempt in 1..=self.max_attempts {
            if probe().await {
                return Ok(attempt);
            }

            debug!("Probe attempt {}/{} failed", attempt, self.max_attempts);
            if attempt < self.max_attempts {
                sleep(self.interval).await;
            }
        }

        Err(StackError::ReadinessTimeout {
            attempts: self.max_attempts,
        })
    }
}
