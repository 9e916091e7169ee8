//! Replay-latest publication of task snapshots.
//!
//! A [`Publisher`] keeps the most recent snapshot in a slot and fans every new
//! snapshot out over a `tokio::sync::broadcast` channel. A [`Subscription`]
//! taken from it first yields the slot's value, then every later snapshot in
//! publish order. Taking a subscription and publishing both happen under the
//! store's lock, so a subscriber never misses or duplicates a snapshot.

use super::task::{Task, TaskQuery};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// Immutable, fully formed copy of the task collection.
pub type Snapshot = Arc<[Task]>;

pub struct Publisher {
    latest: Snapshot,
    sender: broadcast::Sender<Snapshot>,
}

impl Publisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            latest: Arc::from(Vec::new()),
            sender,
        }
    }

    pub fn publish(&mut self, snapshot: Snapshot) {
        self.latest = snapshot.clone();
        // No receivers is fine: late subscribers read the slot.
        let _ = self.sender.send(snapshot);
    }

    pub fn latest(&self) -> Snapshot {
        self.latest.clone()
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            pending: Some(self.latest.clone()),
            receiver: self.sender.subscribe(),
        }
    }
}

/// Stream of snapshots as seen by one view.
#[derive(Debug)]
pub struct Subscription {
    pending: Option<Snapshot>,
    receiver: broadcast::Receiver<Snapshot>,
}

impl Subscription {
    /// Waits for the next snapshot. Returns `None` only once the store
    /// itself has been dropped.
    ///
    /// A subscriber that falls more than the channel capacity behind skips
    /// the snapshots it missed and resumes at the oldest one still buffered.
    /// Order is kept; the skip is logged as a warning.
    pub async fn next(&mut self) -> Option<Snapshot> {
        if let Some(snapshot) = self.pending.take() {
            return Some(snapshot);
        }

        loop {
            match self.receiver.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "snapshot subscriber lagged, resuming at oldest retained snapshot");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`next`](Self::next).
    pub fn try_next(&mut self) -> Option<Snapshot> {
        if let Some(snapshot) = self.pending.take() {
            return Some(snapshot);
        }

        loop {
            match self.receiver.try_recv() {
                Ok(snapshot) => return Some(snapshot),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "snapshot subscriber lagged, resuming at oldest retained snapshot");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Next snapshot with the list view's filter applied.
    pub async fn next_filtered(&mut self, query: &TaskQuery) -> Option<Vec<Task>> {
        self.next().await.map(|snapshot| query.apply(&snapshot))
    }
}
