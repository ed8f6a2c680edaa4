use std::thread;

use deskfeed::NewsFeed;

use crate::common::{bulletin, item};

#[test]
fn accept_normalizes_and_appends() {
    let feed = NewsFeed::with_capacity(20);

    assert!(feed.accept(&bulletin("Breaking News: [AAPL] hits all time high!").exchange("NASD")));
    assert!(!feed.accept(&bulletin("Breaking News: [AAPL] hits all time high!")));
    assert!(feed.accept(&bulletin("TSLA falls")));

    let items = feed.snapshot();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].symbol.as_deref(), Some("AAPL"));
    assert_eq!(items[0].source, "NASD");
    assert_eq!(items[1].symbol.as_deref(), Some("TSLA"));
}

#[test]
fn clones_share_the_same_history() {
    let feed = NewsFeed::with_capacity(5);
    let other = feed.clone();

    feed.append(item("via first handle", 1));
    other.append(item("via second handle", 2));

    assert_eq!(feed.len(), 2);
    assert_eq!(other.len(), 2);
}

#[test]
fn snapshot_mutation_does_not_leak_back() {
    let feed = NewsFeed::with_capacity(5);
    feed.append(item("stable", 1));

    let mut copy = feed.snapshot();
    copy[0].headline = "tampered".to_string();

    assert_eq!(feed.snapshot()[0].headline, "stable");
}

#[test]
fn concurrent_writers_and_readers_preserve_the_invariants() {
    let feed = NewsFeed::with_capacity(8);

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let feed = feed.clone();
            thread::spawn(move || {
                for n in 0..50 {
                    feed.append(item(&format!("writer {w} headline {n}"), n));
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let feed = feed.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let snap = feed.snapshot();
                    assert!(snap.len() <= 8);
                    for pair in snap.windows(2) {
                        assert_ne!(pair[0].headline, pair[1].headline);
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(feed.len(), 8);
    let snap = feed.snapshot();
    let unique: std::collections::HashSet<_> = snap.iter().map(|i| i.headline.as_str()).collect();
    assert_eq!(unique.len(), snap.len());
}
