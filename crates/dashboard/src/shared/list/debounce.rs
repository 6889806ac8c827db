//! Debounced search input.
//!
//! Every keystroke restarts the timer; only the last term of a burst is
//! delivered. The pending timer is aborted when the debouncer is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct SearchDebouncer {
    delay: Duration,
    tx: Arc<watch::Sender<String>>,
    pending: Option<(String, JoinHandle<()>)>,
}

impl SearchDebouncer {
    /// Returns the debouncer and the receiver of settled search terms.
    /// The receiver starts with an empty term.
    pub fn new(delay: Duration) -> (Self, watch::Receiver<String>) {
        let (tx, rx) = watch::channel(String::new());
        let debouncer = Self {
            delay,
            tx: Arc::new(tx),
            pending: None,
        };
        (debouncer, rx)
    }

    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, term: impl Into<String>) {
        self.cancel();

        let term = term.into();
        let tx = Arc::clone(&self.tx);
        let delay = self.delay;
        let delivered = term.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(delivered);
        });
        self.pending = Some((term, handle));
    }

    /// Clearing the field applies immediately, without waiting for the timer
    pub fn clear(&mut self) {
        self.cancel();
        let _ = self.tx.send(String::new());
    }

    /// Delivers the pending term now, if its timer has not fired yet
    pub fn flush(&mut self) {
        if let Some((term, handle)) = self.pending.take() {
            if handle.is_finished() {
                return;
            }
            handle.abort();
            let _ = self.tx.send(term);
        }
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|(_, handle)| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_only_last_term_of_burst_is_delivered() {
        let (mut debouncer, rx) = SearchDebouncer::new(DELAY);

        debouncer.submit("张");
        sleep(Duration::from_millis(100)).await;
        debouncer.submit("张三");
        sleep(Duration::from_millis(299)).await;
        assert!(!rx.has_changed().unwrap());
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(2)).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow(), "张三");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_timer() {
        let (mut debouncer, rx) = SearchDebouncer::new(DELAY);
        debouncer.submit("abc");
        drop(debouncer);

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(*rx.borrow(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_and_flush_apply_immediately() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DELAY);

        debouncer.submit("xyz");
        debouncer.flush();
        assert_eq!(*rx.borrow_and_update(), "xyz");

        debouncer.submit("pending");
        debouncer.clear();
        assert_eq!(*rx.borrow_and_update(), "");

        sleep(Duration::from_millis(1000)).await;
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_after_delivery_sends_nothing() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DELAY);

        debouncer.submit("abc");
        sleep(Duration::from_millis(400)).await;
        assert_eq!(*rx.borrow_and_update(), "abc");

        debouncer.flush();
        assert!(!rx.has_changed().unwrap());
    }
}
