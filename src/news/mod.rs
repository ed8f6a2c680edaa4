//! Bulletin normalization and the bounded, deduplicating news feed.
//!
//! The pipeline is three small pieces composed by [`NewsFeed::accept`]:
//! [`extract_symbol`] pulls a best-effort ticker out of the headline,
//! [`normalize`] fills in timestamp, source, and URL defaults, and
//! [`BoundedHistory`] keeps the newest N unique headlines in insertion
//! order. The feed wraps the history behind one mutex so ingest tasks and
//! polling display code share it without further coordination.

mod extract;
mod feed;
mod history;
mod model;
mod normalize;
mod wire;

pub use extract::extract_symbol;
pub use feed::NewsFeed;
pub use history::BoundedHistory;
pub use model::NewsItem;
pub use normalize::{SEARCH_URL_BASE, normalize};
pub use wire::{RawBulletin, parse_bulletins};
