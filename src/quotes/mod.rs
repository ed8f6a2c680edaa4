//! Top-of-book quote state assembled from gateway tick events.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::core::models::QuoteState;

/// The tick fields this crate tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickField {
    Bid,
    Ask,
    Last,
}

impl TickField {
    /// Maps a gateway tick-type code. Only bid (1), ask (2), and last (4)
    /// are tracked; every other code maps to `None`.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(TickField::Bid),
            2 => Some(TickField::Ask),
            4 => Some(TickField::Last),
            _ => None,
        }
    }
}

/// Thread-shared per-symbol quote board.
#[derive(Debug, Clone, Default)]
pub struct QuoteBoard {
    inner: Arc<Mutex<HashMap<String, QuoteState>>>,
}

impl QuoteBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one tick, updating the named field of the symbol's state
    /// and leaving the other fields as they were.
    pub fn apply(&self, symbol: impl Into<String>, field: TickField, price: f64) {
        let mut board = self.lock();
        let state = board.entry(symbol.into()).or_default();
        match field {
            TickField::Bid => state.bid = Some(price),
            TickField::Ask => state.ask = Some(price),
            TickField::Last => state.last = Some(price),
        }
    }

    /// Current state for `symbol`; `None` before the first tracked tick.
    #[must_use]
    pub fn quote(&self, symbol: &str) -> Option<QuoteState> {
        self.lock().get(symbol).copied()
    }

    /// Midpoint for `symbol`, once both sides of the book have been seen.
    #[must_use]
    pub fn mid(&self, symbol: &str) -> Option<f64> {
        self.quote(symbol).and_then(|state| state.mid())
    }

    /// Owned copy of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, QuoteState> {
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

    fn lock(&self) -> MutexGuard<'_, HashMap<String, QuoteState>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
