use deskfeed::{AccountPanel, AccountValue};

fn value(v: &str, ccy: Option<&str>) -> AccountValue {
    AccountValue {
        value: v.to_string(),
        currency: ccy.map(str::to_string),
    }
}

#[test]
fn tags_are_keyed_independently() {
    let panel = AccountPanel::new();
    panel.apply("NetLiquidation", value("1000000.00", Some("USD")));
    panel.apply("BuyingPower", value("250000.00", Some("USD")));

    assert_eq!(panel.len(), 2);
    assert_eq!(panel.get("NetLiquidation").unwrap().value, "1000000.00");
    assert_eq!(panel.get("BuyingPower").unwrap().value, "250000.00");
}

#[test]
fn updates_are_last_write_wins() {
    let panel = AccountPanel::new();
    panel.apply("NetLiquidation", value("1000000.00", Some("USD")));
    panel.apply("NetLiquidation", value("1000500.00", Some("USD")));

    assert_eq!(panel.len(), 1);
    assert_eq!(panel.get("NetLiquidation").unwrap().value, "1000500.00");
}

#[test]
fn unknown_tag_reads_as_none() {
    let panel = AccountPanel::new();
    assert!(panel.get("GrossPositionValue").is_none());
}

#[test]
fn display_joins_value_and_currency() {
    assert_eq!(value("1000000.00", Some("USD")).to_string(), "1000000.00 USD");
    assert_eq!(value("42", None).to_string(), "42");
    assert_eq!(value("42", Some("")).to_string(), "42");
}

#[test]
fn snapshot_is_an_independent_copy() {
    let panel = AccountPanel::new();
    panel.apply("AccruedCash", value("12.34", Some("USD")));

    let mut copy = panel.snapshot();
    copy.clear();

    assert_eq!(panel.len(), 1);
}
