use chrono::{DateTime, TimeZone, Utc};

use super::{extract::extract_symbol, model::NewsItem, wire::RawBulletin};

/// Prefix of the fallback link constructed for bulletins without a URL.
pub const SEARCH_URL_BASE: &str = "https://www.google.com/search?q=";

/// Normalizes a raw bulletin into a [`NewsItem`].
///
/// Normalization never fails. The timestamp is the bulletin's publish time
/// when it carries a representable one, else `ingested_at`. The source is
/// the first non-empty of the bulletin's two labels, else `""`. The symbol
/// comes from [`extract_symbol`] and may be absent. When the bulletin has
/// no non-empty URL, a search link is built from the headline with ASCII
/// spaces replaced by `+`; no other characters are escaped, so a headline
/// containing `&` or `%` yields a link that only approximates it.
#[must_use]
pub fn normalize(raw: &RawBulletin, ingested_at: DateTime<Utc>) -> NewsItem {
    let timestamp = raw
        .published_at
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or(ingested_at);

    let url = match raw.url.as_deref() {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => fallback_search_url(&raw.headline),
    };

    NewsItem {
        timestamp,
        source: raw.source().to_string(),
        symbol: extract_symbol(&raw.headline),
        headline: raw.headline.clone(),
        url,
    }
}

fn fallback_search_url(headline: &str) -> String {
    format!("{SEARCH_URL_BASE}{}", headline.replace(' ', "+"))
}
