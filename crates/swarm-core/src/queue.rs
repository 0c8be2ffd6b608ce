//! FIFO queue contract and the default in-memory implementation

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

/// An unbounded FIFO queue connecting agents
///
/// `put` never blocks the caller (queues are unbounded); `get` suspends the
/// calling task until an item is available. `is_empty` is a best-effort
/// snapshot: it may race with a concurrent `put`, in which case the item is
/// simply observed on a later check. There is no peek and no fairness
/// guarantee beyond FIFO order of `put` calls.
#[async_trait]
pub trait MessageQueue<T: Send>: Send + Sync {
    /// Enqueue an item without blocking
    async fn put(&self, item: T);

    /// Dequeue the oldest item, suspending until one is available
    async fn get(&self) -> T;

    /// Whether the queue held zero items at the instant of the call
    fn is_empty(&self) -> bool;
}

/// Default in-memory queue backed by a `VecDeque` and a tokio [`Notify`]
pub struct InMemoryQueue<T> {
    items: Mutex<VecDeque<T>>,
    notify: Notify,
}

impl<T> InMemoryQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
        }
    }

    /// Number of items currently queued
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

impl<T> Default for InMemoryQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Send> MessageQueue<T> for InMemoryQueue<T> {
    async fn put(&self, item: T) {
        self.items.lock().unwrap().push_back(item);
        self.notify.notify_one();
    }

    async fn get(&self) -> T {
        loop {
            // The Notified future must exist before the emptiness check so
            // a put racing in between is not missed.
            let notified = self.notify.notified();
            if let Some(item) = self.items.lock().unwrap().pop_front() {
                return item;
            }
            notified.await;
        }
    }

    fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready_eq};

    #[tokio::test]
    async fn test_fifo_order() {
        let queue = InMemoryQueue::new();
        queue.put(1).await;
        queue.put(2).await;
        queue.put(3).await;

        assert_eq!(queue.get().await, 1);
        assert_eq!(queue.get().await, 2);
        assert_eq!(queue.get().await, 3);
    }

    #[tokio::test]
    async fn test_is_empty_tracks_contents() {
        let queue = InMemoryQueue::new();
        assert!(queue.is_empty());

        queue.put("item").await;
        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 1);

        queue.get().await;
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_get_suspends_until_put() {
        let queue = InMemoryQueue::new();

        let mut get = tokio_test::task::spawn(queue.get());
        assert_pending!(get.poll());

        queue.put(7).await;
        assert!(get.is_woken());
        assert_ready_eq!(get.poll(), 7);
    }

    #[tokio::test]
    async fn test_interleaved_puts_and_gets() {
        let queue = InMemoryQueue::new();
        queue.put("a").await;
        queue.put("b").await;
        assert_eq!(queue.get().await, "a");

        queue.put("c").await;
        assert_eq!(queue.get().await, "b");
        assert_eq!(queue.get().await, "c");
        assert!(queue.is_empty());
    }
}
