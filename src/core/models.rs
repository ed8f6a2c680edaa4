use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/* ----- FILLS (shared by activity/ and core/wire) ----- */

/// Order side of an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Maps a gateway side label onto a side.
    ///
    /// Execution reports label buys as either `BUY` (order-side form) or
    /// `BOT` (execution-report form); both map to [`Side::Buy`]. Anything
    /// else, including `SELL` and `SLD`, maps to [`Side::Sell`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("buy") || label.eq_ignore_ascii_case("bot") {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    /// The `+`/`-` marker dashboards prefix activity rows with.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Side::Buy => '+',
            Side::Sell => '-',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A single execution, as kept by the activity log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    pub symbol: String,
    pub side: Side,
    pub qty: f64,
    pub price: f64,
    /// Venue the execution printed on; empty when the gateway omits it.
    pub exchange: String,
    pub timestamp: DateTime<Utc>,
}

/* ----- POSITIONS (shared by positions/ and core/wire) ----- */

/// Signed holding for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Signed quantity; negative for shorts. A reported zero is a real
    /// update (a flattened position) and is kept, not removed.
    pub qty: f64,
    pub avg_cost: Option<f64>,
}

/* ----- ACCOUNT SUMMARY ----- */

/// One account-summary value as reported by the gateway.
///
/// Values stay in the string form the gateway delivered; summary tags mix
/// monetary amounts, counts, and plain labels, so the crate does not guess
/// a numeric type for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountValue {
    pub value: String,
    pub currency: Option<String>,
}

impl fmt::Display for AccountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency.as_deref() {
            Some(ccy) if !ccy.is_empty() => write!(f, "{} {}", self.value, ccy),
            _ => write!(f, "{}", self.value),
        }
    }
}

/* ----- QUOTES (shared by quotes/ and core/wire) ----- */

/// Per-symbol top-of-book state assembled from tick events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QuoteState {
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
}

impl QuoteState {
    /// Midpoint of the book, once both sides have been seen.
    #[must_use]
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }
}
