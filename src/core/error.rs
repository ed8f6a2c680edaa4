use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// The state containers themselves never fail: a headline with no
/// recognizable symbol normalizes to an item without one, a duplicate
/// bulletin is silently ignored, and a full history evicts its oldest
/// entry. Errors arise only at the edges, when parsing scripts, validating
/// builder configuration, or publishing into a stopped ingest task.
#[derive(Debug, Error)]
pub enum DeskError {
    /// A JSON script or record could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid builder configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A script or record was structurally valid but unusable.
    #[error("data format unexpected or missing field: {0}")]
    Data(String),

    /// The ingest channel is closed because its consuming task has stopped.
    #[error("ingest channel closed")]
    ChannelClosed,
}
