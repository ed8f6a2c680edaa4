use deskfeed::BoundedHistory;

use crate::common::item;

#[test]
fn items_are_ordered_oldest_first() {
    let mut history = BoundedHistory::new(5);
    assert!(history.append(item("first", 1)));
    assert!(history.append(item("second", 2)));
    assert!(history.append(item("third", 3)));

    let headlines: Vec<_> = history.snapshot().into_iter().map(|i| i.headline).collect();
    assert_eq!(headlines, ["first", "second", "third"]);
}

#[test]
fn duplicate_headline_is_ignored_and_first_insertion_wins() {
    let mut history = BoundedHistory::new(5);
    assert!(history.append(item("only once", 1)));
    assert!(!history.append(item("only once", 99)));

    assert_eq!(history.len(), 1);
    let kept = &history.snapshot()[0];
    // the original entry survives with its original timestamp
    assert_eq!(kept.timestamp, crate::common::ts(1));
}

#[test]
fn duplicate_does_not_disturb_order() {
    let mut history = BoundedHistory::new(5);
    history.append(item("a", 1));
    history.append(item("b", 2));
    history.append(item("a", 3));

    let headlines: Vec<_> = history.snapshot().into_iter().map(|i| i.headline).collect();
    assert_eq!(headlines, ["a", "b"]);
}

#[test]
fn insertion_past_capacity_evicts_exactly_the_oldest() {
    let mut history = BoundedHistory::new(3);
    for (n, headline) in ["one", "two", "three"].iter().enumerate() {
        assert!(history.append(item(headline, n as i64)));
    }
    assert_eq!(history.len(), 3);

    assert!(history.append(item("four", 4)));
    assert_eq!(history.len(), 3);

    let headlines: Vec<_> = history.snapshot().into_iter().map(|i| i.headline).collect();
    assert_eq!(headlines, ["two", "three", "four"]);
}

#[test]
fn length_never_exceeds_capacity() {
    let mut history = BoundedHistory::new(4);
    for n in 0..25 {
        history.append(item(&format!("headline {n}"), n));
        assert!(history.len() <= 4);
    }
    let headlines: Vec<_> = history.snapshot().into_iter().map(|i| i.headline).collect();
    assert_eq!(
        headlines,
        ["headline 21", "headline 22", "headline 23", "headline 24"]
    );
}

#[test]
fn evicted_headline_may_be_inserted_again() {
    let mut history = BoundedHistory::new(2);
    history.append(item("a", 1));
    history.append(item("b", 2));
    history.append(item("c", 3)); // evicts "a"

    assert!(history.append(item("a", 4)));
    let headlines: Vec<_> = history.snapshot().into_iter().map(|i| i.headline).collect();
    assert_eq!(headlines, ["c", "a"]);
}

#[test]
fn snapshot_is_an_independent_copy() {
    let mut history = BoundedHistory::new(3);
    history.append(item("a", 1));

    let mut copy = history.snapshot();
    copy.clear();
    copy.push(item("bogus", 9));

    assert_eq!(history.len(), 1);
    assert_eq!(history.snapshot()[0].headline, "a");
}

#[test]
fn zero_capacity_accepts_and_immediately_evicts() {
    let mut history = BoundedHistory::new(0);
    assert!(history.append(item("a", 1)));
    assert!(history.is_empty());
    assert_eq!(history.capacity(), 0);
}
