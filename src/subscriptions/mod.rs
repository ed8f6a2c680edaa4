//! Request-ID bookkeeping for market-data subscriptions.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// Identifier allocated for one market-data request, as handed to the
/// gateway SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReqId(pub i64);

impl fmt::Display for ReqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Thread-shared symbol-to-request-ID table.
///
/// IDs come from a counter starting at 1 and are never reused within a
/// session, so a late tick for a cancelled subscription can never be
/// misattributed to a newer one.
#[derive(Debug, Clone)]
pub struct SubscriptionRegistry {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    next_id: i64,
    by_symbol: HashMap<String, ReqId>,
}

impl SubscriptionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 1,
                by_symbol: HashMap::new(),
            })),
        }
    }

    /// Returns the request ID for `symbol`, allocating one on first use.
    ///
    /// Idempotent: subscribing a symbol that is already mapped returns the
    /// existing ID without consuming a new one, so callers can skip the
    /// duplicate gateway request.
    pub fn subscribe(&self, symbol: impl Into<String>) -> ReqId {
        let mut inner = self.lock();
        let symbol = symbol.into();
        if let Some(&id) = inner.by_symbol.get(&symbol) {
            return id;
        }
        let id = ReqId(inner.next_id);
        inner.next_id += 1;
        inner.by_symbol.insert(symbol, id);
        id
    }

    /// Removes the mapping for `symbol`, returning the ID the caller
    /// should cancel with the gateway. `None` when not subscribed.
    pub fn cancel(&self, symbol: &str) -> Option<ReqId> {
        self.lock().by_symbol.remove(symbol)
    }

    #[must_use]
    pub fn req_id_for(&self, symbol: &str) -> Option<ReqId> {
        self.lock().by_symbol.get(symbol).copied()
    }

    /// Reverse lookup. Linear in the number of live subscriptions, which
    /// is bounded by the dashboard's watch list.
    #[must_use]
    pub fn symbol_for(&self, id: ReqId) -> Option<String> {
        self.lock()
            .by_symbol
            .iter()
            .find(|(_, &mapped)| mapped == id)
            .map(|(symbol, _)| symbol.clone())
    }

    /// Currently subscribed symbols, in no particular order.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        self.lock().by_symbol.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().by_symbol.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().by_symbol.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SubscriptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
