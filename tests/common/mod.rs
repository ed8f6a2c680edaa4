#![allow(dead_code)]

use std::{fs, path::Path, time::Duration};

use chrono::{DateTime, TimeZone, Utc};
use deskfeed::{NewsItem, RawBulletin};

pub fn fixture(name: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A fixed, readable timestamp for deterministic assertions.
pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap()
}

pub fn bulletin(headline: &str) -> RawBulletin {
    RawBulletin::new(headline)
}

/// A normalized item with a stable timestamp, for direct history tests.
pub fn item(headline: &str, secs: i64) -> NewsItem {
    deskfeed::news::normalize(&bulletin(headline), ts(secs))
}

/// Polls `cond` until it holds, failing the test after three seconds.
pub async fn eventually(what: &str, cond: impl Fn() -> bool) {
    let wait = async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(3), wait)
        .await
        .unwrap_or_else(|_| panic!("timed out waiting for: {what}"));
}
