//! Scripted event source for demos and offline tests.
//!
//! Plays a fixed script of gateway events into an ingest sender on a
//! timer, the way a canned bulletin generator would. The script can come
//! from code or from a JSON array in the replay-script shape.

use std::time::Duration;

use tokio::{
    select,
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::interval,
};

use crate::core::{
    DeskError,
    session::DEFAULT_REPLAY_INTERVAL,
    wire::{GatewayEvent, parse_events},
};

/* ---------------- Public API ---------------- */

/// A handle for a running replay task.
pub struct ReplayHandle {
    join: JoinHandle<()>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl ReplayHandle {
    /// Politely ask the task to stop and wait for it to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.join.await;
    }

    /// Immediately abort the background task (no more events will be sent).
    pub fn abort(self) {
        self.join.abort();
    }
}

/// Builder to start a replay task over a fixed script.
pub struct ReplayBuilder {
    events: Vec<GatewayEvent>,
    interval: Duration,
    cycle: bool,
}

impl ReplayBuilder {
    /// Replay these events, in order.
    #[must_use]
    pub fn new(events: Vec<GatewayEvent>) -> Self {
        Self {
            events,
            interval: DEFAULT_REPLAY_INTERVAL,
            cycle: false,
        }
    }

    /// Parses a JSON array of tagged events into a script.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Json`] when the body cannot be parsed.
    pub fn from_json(body: &str) -> Result<Self, DeskError> {
        Ok(Self::new(parse_events(body)?))
    }

    /// Delay between events. Default: [`DEFAULT_REPLAY_INTERVAL`]. The
    /// first event is sent immediately, subsequent ones one interval apart.
    #[must_use]
    pub const fn interval(mut self, dur: Duration) -> Self {
        self.interval = dur;
        self
    }

    /// Restart the script from the top once exhausted (default: stop).
    #[must_use]
    pub const fn cycle(mut self, yes: bool) -> Self {
        self.cycle = yes;
        self
    }

    /// Start the replay, feeding `tx`.
    ///
    /// The task ends at the end of the script (unless cycling), when the
    /// consuming side of the channel goes away, or via the handle.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Data`] when the script is empty.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(events = self.events.len(), cycle = self.cycle), err))]
    pub fn start(self, tx: mpsc::Sender<GatewayEvent>) -> Result<ReplayHandle, DeskError> {
        if self.events.is_empty() {
            return Err(DeskError::Data("replay: script must not be empty".into()));
        }

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        // move into task
        let events = self.events;
        let cycle = self.cycle;
        let period = self.interval;

        let join = tokio::spawn(async move {
            let mut ticker = interval(period);
            let mut index = 0usize;

            loop {
                select! {
                    _ = ticker.tick() => {
                        let event = events[index % events.len()].clone();
                        index += 1;

                        if tx.send(event).await.is_err() {
                            if std::env::var("DESK_DEBUG").ok().as_deref() == Some("1") {
                                eprintln!("DESK_DEBUG(replay): ingest channel closed, stopping");
                            }
                            break;
                        }

                        if !cycle && index == events.len() {
                            break;
                        }
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }
        });

        Ok(ReplayHandle {
            join,
            stop_tx: Some(stop_tx),
        })
    }
}
