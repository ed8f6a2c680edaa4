use std::collections::VecDeque;

use super::model::NewsItem;

/// Fixed-capacity, insertion-ordered, deduplicating news history.
///
/// The container itself is single-threaded; [`NewsFeed`](super::NewsFeed)
/// wraps it in the lock that dashboard threads share. Two invariants hold
/// after every operation: items are ordered oldest to newest by insertion,
/// and no two items share a headline.
#[derive(Debug, Clone)]
pub struct BoundedHistory {
    items: VecDeque<NewsItem>,
    capacity: usize,
}

impl BoundedHistory {
    /// An empty history holding at most `capacity` items.
    ///
    /// A zero capacity yields a degenerate history that accepts and
    /// immediately evicts every item; session builders reject it upfront.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `item` unless an entry with the same headline is already
    /// present. Returns whether the item was inserted.
    ///
    /// First insertion wins: a duplicate leaves the existing entry, its
    /// position, and its timestamp untouched. When an insertion pushes the
    /// length past the capacity, exactly one entry, the oldest, is evicted.
    pub fn append(&mut self, item: NewsItem) -> bool {
        if self.items.iter().any(|seen| seen.headline == item.headline) {
            return false;
        }
        self.items.push_back(item);
        if self.items.len() > self.capacity {
            self.items.pop_front();
        }
        true
    }

    /// Owned copy of the history, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NewsItem> {
        self.items.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
