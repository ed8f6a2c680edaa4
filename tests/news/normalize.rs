use deskfeed::news::{SEARCH_URL_BASE, normalize, parse_bulletins};

use crate::common::{bulletin, ts};

#[test]
fn ingestion_time_is_used_when_bulletin_has_no_publish_time() {
    let item = normalize(&bulletin("TSLA falls"), ts(1_718_000_000));
    assert_eq!(item.timestamp, ts(1_718_000_000));
}

#[test]
fn publish_time_wins_over_ingestion_time() {
    let raw = bulletin("TSLA falls").published_at(1_717_990_000);
    let item = normalize(&raw, ts(1_718_000_000));
    assert_eq!(item.timestamp, ts(1_717_990_000));
}

#[test]
fn source_prefers_primary_label() {
    let raw = bulletin("x").exchange("NYSE").orig_exchange("NASD");
    assert_eq!(normalize(&raw, ts(0)).source, "NYSE");
}

#[test]
fn source_falls_back_to_secondary_label() {
    let raw = bulletin("x").exchange("").orig_exchange("NASD");
    assert_eq!(normalize(&raw, ts(0)).source, "NASD");

    let raw = bulletin("x").orig_exchange("NASD");
    assert_eq!(normalize(&raw, ts(0)).source, "NASD");
}

#[test]
fn source_is_empty_when_no_label_is_supplied() {
    assert_eq!(normalize(&bulletin("x"), ts(0)).source, "");
}

#[test]
fn supplied_url_is_kept_verbatim() {
    let raw = bulletin("x").url("https://example.com/a?b=c&d=e");
    assert_eq!(normalize(&raw, ts(0)).url, "https://example.com/a?b=c&d=e");
}

#[test]
fn missing_url_becomes_search_link() {
    let item = normalize(&bulletin("AAPL hits high"), ts(0));
    assert_eq!(item.url, format!("{SEARCH_URL_BASE}AAPL+hits+high"));
}

#[test]
fn empty_url_becomes_search_link() {
    let raw = bulletin("AAPL hits high").url("");
    assert_eq!(
        normalize(&raw, ts(0)).url,
        format!("{SEARCH_URL_BASE}AAPL+hits+high")
    );
}

#[test]
fn search_link_replaces_only_ascii_spaces() {
    // tabs and reserved characters pass through unescaped
    let item = normalize(&bulletin("up 17% & more\ttoday"), ts(0));
    assert_eq!(item.url, format!("{SEARCH_URL_BASE}up+17%+&+more\ttoday"));
}

#[test]
fn headline_is_stored_unmodified() {
    let text = "  [AAPL]  spaced   oddly!  ";
    let item = normalize(&bulletin(text), ts(0));
    assert_eq!(item.headline, text);
}

#[test]
fn symbol_extraction_is_wired_in() {
    assert_eq!(
        normalize(&bulletin("Update: [MSFT] Hits an all-time high"), ts(0)).symbol,
        Some("MSFT".to_string())
    );
    assert_eq!(
        normalize(&bulletin("nothing to see here"), ts(0)).symbol,
        None
    );
}

#[test]
fn batch_shape_parses_with_message_alias() {
    let raws = parse_bulletins(&crate::common::fixture("bulletins_sample")).unwrap();
    assert_eq!(raws.len(), 13);
    assert_eq!(raws[0].headline, "Breaking News: [AAPL] hits all time high!");
    assert_eq!(raws[0].exchange.as_deref(), Some("APPL"));
    assert!(
        raws[0]
            .url
            .as_deref()
            .unwrap_or("")
            .starts_with("https://www.barrons.com/")
    );
    assert_eq!(raws[0].published_at, None);
}

#[test]
fn live_shape_parses_with_orig_exchange() {
    let raws =
        parse_bulletins(r#"[{"message": "TSLA falls", "origExchange": "NASD"}]"#).unwrap();
    assert_eq!(raws.len(), 1);
    assert_eq!(raws[0].headline, "TSLA falls");
    assert_eq!(raws[0].orig_exchange.as_deref(), Some("NASD"));
    assert_eq!(raws[0].source(), "NASD");
}

#[test]
fn malformed_batch_is_a_json_error() {
    let err = parse_bulletins("{not json").unwrap_err();
    assert!(matches!(err, deskfeed::DeskError::Json(_)));
}
