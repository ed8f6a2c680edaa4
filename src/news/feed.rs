use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use super::{history::BoundedHistory, model::NewsItem, normalize::normalize, wire::RawBulletin};

/// Thread-shared handle over a [`BoundedHistory`].
///
/// Clones share one underlying history. A single mutex serializes appends
/// against snapshots, so a reader never observes a half-applied eviction.
/// Every operation is a short critical section that copies or mutates
/// in-memory state and never blocks on I/O, which keeps the lock safe to
/// take from async ingest tasks and blocking UI threads alike.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    inner: Arc<Mutex<BoundedHistory>>,
}

impl NewsFeed {
    /// A feed retaining at most `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BoundedHistory::new(capacity))),
        }
    }

    /// Normalizes `raw` with the current time as the ingestion timestamp
    /// and appends it. Returns whether the bulletin was new.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, raw), fields(headline = %raw.headline)))]
    pub fn accept(&self, raw: &RawBulletin) -> bool {
        self.append(normalize(raw, Utc::now()))
    }

    /// Appends an already-normalized item; duplicate headlines are ignored.
    /// Returns whether the item was inserted.
    pub fn append(&self, item: NewsItem) -> bool {
        self.lock().append(item)
    }

    /// Owned copy of the current history, oldest first. Mutating the copy
    /// has no effect on the feed.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NewsItem> {
        self.lock().snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    fn lock(&self) -> MutexGuard<'_, BoundedHistory> {
        // Appends are all-or-nothing, so a poisoned lock still guards a
        // consistent history.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
