//! Fixed-capacity ring buffer.
//!
//! Overwrite semantics: once full, `enqueue` evicts the oldest entry instead
//! of growing or rejecting. Used for bounded recent-history tracking in
//! game-state reporting.

use std::collections::VecDeque;

/// Generic fixed-capacity ring.
#[derive(Clone, Debug)]
pub struct CircularBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Create a buffer holding at most `capacity` items.
    ///
    /// A zero capacity is rounded up to one so `enqueue` always retains the
    /// newest item.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item, evicting the oldest when full.
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Remove and return the oldest item.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The oldest item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Bulk enqueue preserving the overwrite rule.
    pub fn extend_from(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.enqueue(item);
        }
    }

    /// Snapshot oldest-to-newest.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Build a buffer of `capacity` from a slice, applying the overwrite rule
    /// when the slice is longer than the capacity.
    pub fn from_slice(capacity: usize, items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut buffer = Self::new(capacity);
        buffer.extend_from(items.iter().cloned());
        buffer
    }
}
