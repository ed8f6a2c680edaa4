use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single normalized news bulletin, as kept by the bounded feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    /// Publish time reported by the feed, or the ingestion time when the
    /// bulletin carried none.
    pub timestamp: DateTime<Utc>,
    /// Exchange or provider label; empty when the feed supplied none.
    pub source: String,
    /// Best-effort ticker extracted from the headline; `None` when no
    /// extraction rule matched.
    pub symbol: Option<String>,
    /// The bulletin text, unmodified.
    pub headline: String,
    /// Deep link supplied by the feed, or a constructed search fallback.
    pub url: String,
}
