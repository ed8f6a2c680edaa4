//! Per-symbol position book fed by gateway position updates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::models::Position;

/// Thread-shared position book.
///
/// Each update overwrites the previous entry for its symbol. A reported
/// zero quantity stays in the book: the dashboard shows flattened lines
/// until the gateway stops reporting them.
#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    inner: Arc<Mutex<HashMap<String, Position>>>,
}

impl PositionBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest position for `symbol`.
    pub fn apply(&self, symbol: impl Into<String>, position: Position) {
        self.lock().insert(symbol.into(), position);
    }

    /// Signed quantity held in `symbol`; `0.0` when the book has never
    /// seen the symbol.
    #[must_use]
    pub fn quantity(&self, symbol: &str) -> f64 {
        self.lock().get(symbol).map_or(0.0, |p| p.qty)
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<Position> {
        self.lock().get(symbol).copied()
    }

    /// Owned copy of the whole book.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, Position> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Position>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
