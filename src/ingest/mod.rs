//! Inbound event channel and its single consuming task.
//!
//! Gateway connection code holds a plain [`mpsc::Sender`] and pushes one
//! [`GatewayEvent`] per SDK callback; one spawned task drains the queue and
//! applies every event to the owning session, in arrival order. All store
//! mutation funnels through that one consumer.

use tokio::{
    select,
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::core::{DeskError, session::DeskSession, wire::GatewayEvent};

/* ---------------- Public API ---------------- */

/// A handle for a running ingest task.
pub struct IngestHandle {
    join: JoinHandle<()>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl IngestHandle {
    /// Politely ask the task to stop and wait for it to finish. Events
    /// still queued at that point are discarded.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.join.await;
    }

    /// Immediately abort the background task.
    pub fn abort(self) {
        self.join.abort();
    }
}

/// Builder to start the consuming task for a session.
pub struct IngestBuilder {
    session: DeskSession,
    channel_capacity: usize,
}

impl IngestBuilder {
    /// Start from an existing session (cloned internally).
    pub fn new(session: &DeskSession) -> Self {
        Self {
            channel_capacity: session.channel_capacity(),
            session: session.clone(),
        }
    }

    /// Override the queue depth configured on the session.
    #[must_use]
    pub const fn channel_capacity(mut self, depth: usize) -> Self {
        self.channel_capacity = depth;
        self
    }

    /// Spawn the consumer. Returns a handle and the sender the gateway
    /// side enqueues into.
    ///
    /// The task ends when every sender clone has been dropped or via the
    /// handle; `stop()` does not wait for the queue to drain.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Config`] when the channel depth is zero.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(depth = self.channel_capacity), err))]
    pub fn start(self) -> Result<(IngestHandle, mpsc::Sender<GatewayEvent>), DeskError> {
        if self.channel_capacity == 0 {
            return Err(DeskError::Config(
                "ingest: channel capacity must be at least 1".into(),
            ));
        }

        let (tx, mut rx) = mpsc::channel::<GatewayEvent>(self.channel_capacity);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let session = self.session;

        let join = tokio::spawn(async move {
            loop {
                select! {
                    maybe_event = rx.recv() => {
                        match maybe_event {
                            Some(event) => session.apply(&event),
                            // all senders dropped
                            None => break,
                        }
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }
        });

        Ok((
            IngestHandle {
                join,
                stop_tx: Some(stop_tx),
            },
            tx,
        ))
    }
}

/// Enqueues one event, surfacing a closed channel as
/// [`DeskError::ChannelClosed`].
///
/// Thin wrapper over [`mpsc::Sender::send`] for gateway code that wants a
/// crate-native error instead of `SendError`.
///
/// # Errors
///
/// Returns [`DeskError::ChannelClosed`] when the consuming task has
/// stopped.
pub async fn publish(
    tx: &mpsc::Sender<GatewayEvent>,
    event: GatewayEvent,
) -> Result<(), DeskError> {
    tx.send(event).await.map_err(|_| DeskError::ChannelClosed)
}
