//! Trailing-edge debounce for values that change faster than they should be acted on.
//!
//! Every [`Debouncer::push`] cancels the pending emission and schedules a new one
//! after the configured delay, so only the last value of a burst is delivered by
//! [`Debouncer::recv`]. Dropping the debouncer cancels the pending timer.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    timer: Option<JoinHandle<()>>,
    pushed: u64,
    delivered: u64,
    tx: mpsc::UnboundedSender<(u64, T)>,
    rx: mpsc::UnboundedReceiver<(u64, T)>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            timer: None,
            pushed: 0,
            delivered: 0,
            tx,
            rx,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn push(&mut self, value: T) {
        self.abort_timer();
        self.pushed += 1;

        let seq = self.pushed;
        let tx = self.tx.clone();
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send((seq, value));
        }));
    }
}

impl<T> Debouncer<T> {
    /// Waits for the next emitted value. Pending forever while nothing is scheduled.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            let (seq, value) = self.rx.recv().await?;
            if let Some(value) = self.accept(seq, value) {
                return Some(value);
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<T> {
        loop {
            let (seq, value) = self.rx.try_recv().ok()?;
            if let Some(value) = self.accept(seq, value) {
                return Some(value);
            }
        }
    }

    /// Drops the scheduled emission, and any emission fired but not yet received.
    pub fn cancel(&mut self) {
        self.abort_timer();
        while self.rx.try_recv().is_ok() {}
        self.delivered = self.pushed;
    }

    // 取消之前送出的值一律丟棄
    fn accept(&mut self, seq: u64, value: T) -> Option<T> {
        if seq <= self.delivered {
            return None;
        }
        self.delivered = seq;
        Some(value)
    }

    /// True while the last pushed value has not been received yet.
    pub fn has_pending(&self) -> bool {
        self.delivered < self.pushed
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.abort_timer();
    }
}
