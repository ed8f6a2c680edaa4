use std::time::Duration;

/// Default capacity of the session news feed, sized for a dashboard list.
pub const DEFAULT_NEWS_CAPACITY: usize = 20;

/// Capacity used by bulletin-tape consumers that keep the raw feed instead
/// of the curated dashboard list.
pub const BULLETIN_TAPE_CAPACITY: usize = 50;

/// Default capacity of the trade-activity log.
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 50;

/// Default depth of the ingest channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Cadence at which display layers are expected to poll snapshots.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Default delay between replayed script events.
pub const DEFAULT_REPLAY_INTERVAL: Duration = Duration::from_secs(15);
