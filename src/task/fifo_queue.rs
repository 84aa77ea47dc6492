use std::ops::Deref;
use std::sync::Arc;

use intrusive_collections::{LinkedList, LinkedListAtomicLink, intrusive_adapter};

/// An entry wrapper for the [`FifoQueue`].
///
/// It adds the link the intrusive list threads through.
pub struct Queued<T> {
    inner: T,
    link: LinkedListAtomicLink,
}

impl<T> Queued<T> {
    /// Creates a new [`Queued`] entry from the inner value.
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            link: LinkedListAtomicLink::new(),
        }
    }
}

impl<T> Deref for Queued<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

intrusive_adapter!(QueueAdapter<T> = Arc<Queued<T>>: Queued<T> { link => LinkedListAtomicLink });

/// A plain first-in-first-out queue.
///
/// Entries are appended at the tail and taken from the head, never reordered
/// and never deduplicated. It internally uses an intrusive linked list.
pub struct FifoQueue<T> {
    list: LinkedList<QueueAdapter<T>>,
    len: usize,
}

impl<T> FifoQueue<T> {
    /// Creates a new empty [`FifoQueue`].
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(QueueAdapter::new()),
            len: 0,
        }
    }

    pub fn push_back(&mut self, value: T) {
        self.list.push_back(Arc::new(Queued::new(value)));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<Arc<Queued<T>>> {
        let entry = self.list.pop_front()?;
        self.len -= 1;
        Some(entry)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
