//! Minimum-interval gate for outbound requests

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Spaces consecutive calls at least `delay` apart
///
/// Holds a single "last call initiated" instant. One limiter is shared by every
/// source, so the spacing applies across sources too. The lock is held across
/// the wait, which keeps the read-modify-write atomic when several tasks go
/// through the same limiter.
#[derive(Debug, Default)]
pub struct RateLimiter {
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with no recorded call
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until `delay` has passed since the previous call, then record this one
    ///
    /// Returns how long the caller was held back. The first call after
    /// creation or [`reset`](Self::reset) never waits.
    pub async fn acquire(&self, delay: Duration) -> Duration {
        let mut last_call = self.last_call.lock().await;

        let mut waited = Duration::ZERO;
        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < delay {
                waited = delay - elapsed;
                debug!("Rate limiter holding request for {:?}", waited);
                sleep(waited).await;
            }
        }

        *last_call = Some(Instant::now());
        waited
    }

    /// Forget the last call, as in a fresh process
    pub async fn reset(&self) {
        *self.last_call.lock().await = None;
    }

    /// Instant of the most recent call, if any
    pub async fn last_call(&self) -> Option<Instant> {
        *self.last_call.lock().await
    }
}
