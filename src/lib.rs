//! deskfeed: client-side state core for trading-workstation dashboards.
//!
//! The crate owns the session-scoped stores a dashboard reads: a bounded,
//! deduplicating news feed, a trade-activity log, a position book, an
//! account-summary panel, a top-of-book quote board, and request-ID
//! bookkeeping for market-data subscriptions. One inbound channel of
//! [`GatewayEvent`]s drains into those stores through a single consuming
//! task, and display code polls owned snapshots on its own cadence. The
//! brokerage SDK stays on the other side of [`GatewayEvent`]: this crate
//! never opens sockets or speaks a wire protocol.
//!
//! ```
//! use deskfeed::{DeskSession, GatewayEvent, RawBulletin};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), deskfeed::DeskError> {
//! let session = DeskSession::builder().news_capacity(20).build()?;
//! let (handle, tx) = session.start_ingest()?;
//!
//! // connection code pushes events as its SDK surfaces them
//! deskfeed::ingest::publish(
//!     &tx,
//!     GatewayEvent::Bulletin(
//!         RawBulletin::new("Breaking News: [AAPL] hits all time high!").exchange("NASD"),
//!     ),
//! )
//! .await?;
//!
//! // a display layer polls snapshots on its own cadence
//! while session.news().is_empty() {
//!     tokio::time::sleep(std::time::Duration::from_millis(5)).await;
//! }
//! for item in session.news().snapshot() {
//!     println!("{} [{}] {}", item.timestamp, item.source, item.headline);
//! }
//!
//! handle.stop().await;
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod activity;
pub mod core;
pub mod ingest;
pub mod news;
pub mod positions;
pub mod quotes;
pub mod replay;
pub mod subscriptions;

pub use account::AccountPanel;
pub use activity::ActivityLog;
pub use crate::core::{
    AccountValue, DeskError, DeskSession, DeskSessionBuilder, Fill, GatewayEvent, Position,
    QuoteState, RawAccountValue, RawFill, RawPosition, RawTick, Side, parse_events,
};
pub use ingest::{IngestBuilder, IngestHandle};
pub use news::{BoundedHistory, NewsFeed, NewsItem, RawBulletin, parse_bulletins};
pub use positions::PositionBook;
pub use quotes::{QuoteBoard, TickField};
pub use replay::{ReplayBuilder, ReplayHandle};
pub use subscriptions::{ReqId, SubscriptionRegistry};
