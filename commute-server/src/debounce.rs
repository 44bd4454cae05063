//! Debounced scheduling for chatty input sources.
//!
//! Search-as-you-type and map panning produce events far faster than the
//! provider should be called. Each event schedules a task to run after a
//! quiet period and cancels the task from the previous event, so only the
//! last event in a burst reaches the gateway. This composes with the
//! gateway's own rate limiter: debouncing decides whether a call happens
//! at all, the limiter decides how soon after the previous call it fires.
//!
//! Every scheduled task receives a sequence ticket. A response whose
//! ticket has gone stale was overtaken while in flight and must be
//! discarded by the caller; the gateway itself offers no cancellation.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default quiet period between the last input event and the actual call.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(5);

/// Sequence ticket handed to each scheduled task.
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl Ticket {
    /// True while no newer event has been scheduled on the same debouncer.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }

    /// Monotonically increasing sequence number of this ticket.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Cancellable delayed-task scheduler for one logical input field.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    latest: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            latest: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Schedule `task` to run after the quiet period, cancelling whatever
    /// was scheduled before it.
    ///
    /// Returns the ticket the task will receive, so callers can also
    /// correlate results from outside the task.
    pub fn schedule<F, Fut>(&mut self, task: F) -> Ticket
    where
        F: FnOnce(Ticket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let ticket = Ticket {
            seq,
            latest: Arc::clone(&self.latest),
        };

        let quiet = self.quiet;
        let task_ticket = ticket.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            task(task_ticket).await;
        }));

        ticket
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::{Ready, ready};
    use std::sync::Mutex;

    /// Record which tickets actually fired.
    fn recorder() -> (Arc<Mutex<Vec<u64>>>, impl Fn(Ticket) -> Ready<()> + Clone) {
        let fired: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let record = move |ticket: Ticket| {
            sink.lock().unwrap().push(ticket.seq());
            ready(())
        };
        (fired, record)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_quiet_period() {
        let (fired, record) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_secs(5));

        debouncer.schedule(record);
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(*fired.lock().unwrap(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn a_new_event_cancels_the_pending_task() {
        let (fired, record) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_secs(5));

        debouncer.schedule(record.clone());
        tokio::time::sleep(Duration::from_secs(2)).await;
        debouncer.schedule(record);
        tokio::time::sleep(Duration::from_secs(6)).await;

        // Only the second task survived the burst.
        assert_eq!(*fired.lock().unwrap(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_firing() {
        let (fired, record) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_secs(5));

        debouncer.schedule(record);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert!(fired.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn tickets_go_stale_when_overtaken() {
        let mut debouncer = Debouncer::new(Duration::from_secs(5));

        let first = debouncer.schedule(|_| async {});
        assert!(first.is_current());

        let second = debouncer.schedule(|_| async {});
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.seq() > first.seq());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_debouncer_cancels_the_task() {
        let (fired, record) = recorder();

        {
            let mut debouncer = Debouncer::new(Duration::from_secs(5));
            debouncer.schedule(record);
        }
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert!(fired.lock().unwrap().is_empty());
    }
}
