//! Call pacing for the mapping provider.
//!
//! One shared "last outbound call" instant gates every provider operation.
//! Search and directions keep at least a second between calls; reverse
//! geocoding runs on a lighter floor because map panning fires it far more
//! often than keystrokes fire searches. Built on tokio time so tests run
//! under a paused clock instead of real sleeps.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Paces outbound provider calls from one shared timestamp.
#[derive(Debug, Default)]
pub struct RateLimiter {
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until at least `min_interval` has passed since the previous
    /// paced call, then claim the current instant as the new last-call time.
    ///
    /// The lock is held across the sleep, so concurrent callers queue
    /// rather than racing the timestamp.
    pub async fn pace(&self, min_interval: Duration) {
        let mut last = self.last_call.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < min_interval {
                tokio::time::sleep(min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_is_immediate() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        limiter.pace(Duration::from_millis(1000)).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn back_to_back_calls_keep_the_minimum_gap() {
        let limiter = RateLimiter::new();
        let interval = Duration::from_millis(1000);

        limiter.pace(interval).await;
        let after_first = Instant::now();
        limiter.pace(interval).await;

        assert!(after_first.elapsed() >= interval);
    }

    #[tokio::test(start_paused = true)]
    async fn lighter_interval_shares_the_timestamp() {
        let limiter = RateLimiter::new();

        limiter.pace(Duration::from_millis(1000)).await;
        let after_first = Instant::now();
        limiter.pace(Duration::from_millis(500)).await;

        // The second call spaces itself by its own floor, not the first's.
        let gap = after_first.elapsed();
        assert!(gap >= Duration::from_millis(500));
        assert!(gap < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_out_calls_do_not_sleep() {
        let limiter = RateLimiter::new();
        let interval = Duration::from_millis(1000);

        limiter.pace(interval).await;
        tokio::time::sleep(Duration::from_millis(1500)).await;

        let before = Instant::now();
        limiter.pace(interval).await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
