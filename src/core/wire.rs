use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::core::{
    DeskError,
    models::{AccountValue, Fill, Position, Side},
};
use crate::news::RawBulletin;

/// One inbound record from a gateway collaborator.
///
/// This is the enqueue side of the ingest channel: connection code decodes
/// whatever its SDK surfaces and pushes one of these per callback. The JSON
/// form, used by replay scripts and fixtures, tags each record with a
/// `type` field (`bulletin`, `fill`, `position`, `account_value`, `tick`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayEvent {
    /// A live news bulletin.
    Bulletin(RawBulletin),
    /// An execution report.
    Fill(RawFill),
    /// A position update for one symbol.
    Position(RawPosition),
    /// One account-summary tag/value pair.
    AccountValue(RawAccountValue),
    /// A market-data tick for a subscribed request ID.
    Tick(RawTick),
}

/// An execution report as surfaced by a gateway SDK.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFill {
    pub symbol: String,
    /// Gateway side label (`BUY`, `SELL`, `BOT`, `SLD`, ...).
    pub side: String,
    #[serde(alias = "shares")]
    pub qty: f64,
    pub price: f64,
    #[serde(default)]
    pub exchange: Option<String>,
    /// Execution time in epoch seconds, when the SDK reports one.
    #[serde(default)]
    pub time: Option<i64>,
}

impl RawFill {
    /// Converts into the owned model, stamping `ingested_at` when the
    /// gateway did not report an execution time.
    #[must_use]
    pub fn to_fill(&self, ingested_at: DateTime<Utc>) -> Fill {
        let timestamp = self
            .time
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .unwrap_or(ingested_at);
        Fill {
            symbol: self.symbol.clone(),
            side: Side::from_label(&self.side),
            qty: self.qty,
            price: self.price,
            exchange: self.exchange.clone().unwrap_or_default(),
            timestamp,
        }
    }
}

/// A position update as surfaced by a gateway SDK.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPosition {
    pub symbol: String,
    #[serde(alias = "position")]
    pub qty: f64,
    #[serde(default, rename = "avgCost")]
    pub avg_cost: Option<f64>,
}

impl RawPosition {
    #[must_use]
    pub fn to_position(&self) -> Position {
        Position {
            qty: self.qty,
            avg_cost: self.avg_cost,
        }
    }
}

/// One account-summary row as surfaced by a gateway SDK.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAccountValue {
    pub tag: String,
    pub value: String,
    #[serde(default)]
    pub currency: Option<String>,
}

impl RawAccountValue {
    #[must_use]
    pub fn to_value(&self) -> AccountValue {
        AccountValue {
            value: self.value.clone(),
            currency: self.currency.clone(),
        }
    }
}

/// A single market-data tick for a subscribed request ID.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawTick {
    #[serde(rename = "reqId")]
    pub req_id: i64,
    /// Gateway tick field code: 1 = bid, 2 = ask, 4 = last. Other codes are
    /// not tracked and are dropped at dispatch.
    #[serde(rename = "tickType")]
    pub tick_type: i64,
    pub price: f64,
}

/// Parses a JSON array of tagged gateway events, the replay-script shape.
///
/// # Errors
///
/// Returns [`DeskError::Json`] when the body is not a valid array of tagged
/// events.
pub fn parse_events(body: &str) -> Result<Vec<GatewayEvent>, DeskError> {
    serde_json::from_str(body).map_err(DeskError::Json)
}
