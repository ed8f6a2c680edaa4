//! Bounded, insertion-ordered log of executions for an activity pane.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::models::Fill;

/// Thread-shared execution log.
///
/// Unlike the news feed this log does not deduplicate: two identical fills
/// are two real executions. It shares the feed's eviction rule, dropping
/// exactly the oldest entry once an insertion exceeds the capacity.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    fills: VecDeque<Fill>,
    capacity: usize,
}

impl ActivityLog {
    /// A log retaining at most `capacity` fills.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                fills: VecDeque::with_capacity(capacity),
                capacity,
            })),
        }
    }

    /// Appends a fill, evicting the oldest entry when full.
    pub fn push(&self, fill: Fill) {
        let mut inner = self.lock();
        inner.fills.push_back(fill);
        if inner.fills.len() > inner.capacity {
            inner.fills.pop_front();
        }
    }

    /// Owned copy of the log, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Fill> {
        self.lock().fills.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().fills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().fills.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
