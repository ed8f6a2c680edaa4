mod constants;

pub use constants::{
    BULLETIN_TAPE_CAPACITY, DEFAULT_ACTIVITY_CAPACITY, DEFAULT_CHANNEL_CAPACITY,
    DEFAULT_NEWS_CAPACITY, DEFAULT_REFRESH_INTERVAL, DEFAULT_REPLAY_INTERVAL,
};

use chrono::Utc;
use tokio::sync::mpsc;

use crate::core::{DeskError, wire::GatewayEvent};
use crate::{
    account::AccountPanel,
    activity::ActivityLog,
    ingest::{IngestBuilder, IngestHandle},
    news::NewsFeed,
    positions::PositionBook,
    quotes::{QuoteBoard, TickField},
    subscriptions::{ReqId, SubscriptionRegistry},
};

/// Owns every store a dashboard session reads and writes.
///
/// The session is a cheap clonable handle: clones share the same stores,
/// so connection code, the ingest task, and display code can each hold
/// their own copy. All mutation funnels through [`DeskSession::apply`];
/// reads go through the per-store accessors, which hand out snapshots.
#[derive(Debug, Clone)]
pub struct DeskSession {
    news: NewsFeed,
    activity: ActivityLog,
    positions: PositionBook,
    account: AccountPanel,
    quotes: QuoteBoard,
    subscriptions: SubscriptionRegistry,
    channel_capacity: usize,
}

impl Default for DeskSession {
    fn default() -> Self {
        Self::builder().build().expect("default session")
    }
}

impl DeskSession {
    /// Create a new builder.
    pub fn builder() -> DeskSessionBuilder {
        DeskSessionBuilder::default()
    }

    /* -------- store accessors -------- */

    #[must_use]
    pub fn news(&self) -> &NewsFeed {
        &self.news
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    #[must_use]
    pub fn positions(&self) -> &PositionBook {
        &self.positions
    }

    #[must_use]
    pub fn account(&self) -> &AccountPanel {
        &self.account
    }

    #[must_use]
    pub fn quotes(&self) -> &QuoteBoard {
        &self.quotes
    }

    #[must_use]
    pub fn subscriptions(&self) -> &SubscriptionRegistry {
        &self.subscriptions
    }

    pub(crate) const fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    /// Applies one gateway event to its owning store.
    ///
    /// This is the single mutation point shared by the push and pull
    /// models: the ingest task calls it for every drained event, and
    /// embedders that skip the channel may call it directly. Events that
    /// cannot be attributed, a tick for an unknown request ID or an
    /// untracked tick code, are dropped without effect.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn apply(&self, event: &GatewayEvent) {
        match event {
            GatewayEvent::Bulletin(raw) => {
                let _inserted = self.news.accept(raw);
                #[cfg(feature = "tracing")]
                if !_inserted {
                    tracing::debug!(headline = %raw.headline, "duplicate bulletin ignored");
                }
            }
            GatewayEvent::Fill(raw) => self.activity.push(raw.to_fill(Utc::now())),
            GatewayEvent::Position(raw) => self.positions.apply(&raw.symbol, raw.to_position()),
            GatewayEvent::AccountValue(raw) => self.account.apply(&raw.tag, raw.to_value()),
            GatewayEvent::Tick(raw) => {
                let Some(field) = TickField::from_code(raw.tick_type) else {
                    return;
                };
                match self.subscriptions.symbol_for(ReqId(raw.req_id)) {
                    Some(symbol) => self.quotes.apply(symbol, field, raw.price),
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(req_id = raw.req_id, "tick for unknown request id");
                    }
                }
            }
        }
    }

    /// Spawns the ingest task for this session with its configured channel
    /// depth. See [`IngestBuilder`] for the long form.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Config`] when the configured channel depth is
    /// zero.
    pub fn start_ingest(&self) -> Result<(IngestHandle, mpsc::Sender<GatewayEvent>), DeskError> {
        IngestBuilder::new(self).start()
    }
}

/// Builder for [`DeskSession`].
#[derive(Debug, Default)]
pub struct DeskSessionBuilder {
    news_capacity: Option<usize>,
    activity_capacity: Option<usize>,
    channel_capacity: Option<usize>,
}

impl DeskSessionBuilder {
    /// Maximum number of unique headlines the news feed retains.
    /// Default: [`DEFAULT_NEWS_CAPACITY`].
    #[must_use]
    pub const fn news_capacity(mut self, capacity: usize) -> Self {
        self.news_capacity = Some(capacity);
        self
    }

    /// Maximum number of fills the activity log retains.
    /// Default: [`DEFAULT_ACTIVITY_CAPACITY`].
    #[must_use]
    pub const fn activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = Some(capacity);
        self
    }

    /// Depth of the ingest channel spawned by
    /// [`DeskSession::start_ingest`]. Default:
    /// [`DEFAULT_CHANNEL_CAPACITY`].
    #[must_use]
    pub const fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = Some(capacity);
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Config`] when any configured capacity is zero.
    pub fn build(self) -> Result<DeskSession, DeskError> {
        let news_capacity = self.news_capacity.unwrap_or(DEFAULT_NEWS_CAPACITY);
        let activity_capacity = self.activity_capacity.unwrap_or(DEFAULT_ACTIVITY_CAPACITY);
        let channel_capacity = self.channel_capacity.unwrap_or(DEFAULT_CHANNEL_CAPACITY);

        for (name, value) in [
            ("news_capacity", news_capacity),
            ("activity_capacity", activity_capacity),
            ("channel_capacity", channel_capacity),
        ] {
            if value == 0 {
                return Err(DeskError::Config(format!("{name} must be at least 1")));
            }
        }

        Ok(DeskSession {
            news: NewsFeed::with_capacity(news_capacity),
            activity: ActivityLog::with_capacity(activity_capacity),
            positions: PositionBook::new(),
            account: AccountPanel::new(),
            quotes: QuoteBoard::new(),
            subscriptions: SubscriptionRegistry::new(),
            channel_capacity,
        })
    }
}
