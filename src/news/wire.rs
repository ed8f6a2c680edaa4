use serde::Deserialize;

use crate::core::DeskError;

/// A raw news bulletin, as delivered by a gateway collaborator.
///
/// Two shapes arrive in practice and both deserialize into this record:
/// live bulletin callbacks carry `message`/`origExchange`, while scripted
/// and batch feeds carry `headline`/`exchange`/`url`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBulletin {
    /// Free-text bulletin body.
    #[serde(alias = "message")]
    pub headline: String,
    /// Primary source label.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Secondary source label used by live bulletin callbacks.
    #[serde(default, rename = "origExchange")]
    pub orig_exchange: Option<String>,
    /// Deep link, when the feed provides one.
    #[serde(default)]
    pub url: Option<String>,
    /// Publish time in epoch seconds, when the feed provides one.
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<i64>,
}

impl RawBulletin {
    /// A bulletin carrying only a headline; the other fields start unset.
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            exchange: None,
            orig_exchange: None,
            url: None,
            published_at: None,
        }
    }

    /// Sets the primary source label.
    #[must_use]
    pub fn exchange(mut self, label: impl Into<String>) -> Self {
        self.exchange = Some(label.into());
        self
    }

    /// Sets the secondary source label.
    #[must_use]
    pub fn orig_exchange(mut self, label: impl Into<String>) -> Self {
        self.orig_exchange = Some(label.into());
        self
    }

    /// Sets the deep link.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the publish time, in epoch seconds.
    #[must_use]
    pub const fn published_at(mut self, epoch_secs: i64) -> Self {
        self.published_at = Some(epoch_secs);
        self
    }

    /// The first non-empty of the two source labels, or `""`.
    #[must_use]
    pub fn source(&self) -> &str {
        [self.exchange.as_deref(), self.orig_exchange.as_deref()]
            .into_iter()
            .flatten()
            .find(|label| !label.is_empty())
            .unwrap_or("")
    }
}

/// Parses a JSON array of raw bulletins, the batch-feed shape.
///
/// # Errors
///
/// Returns [`DeskError::Json`] when the body is not a valid array of
/// bulletin records.
pub fn parse_bulletins(body: &str) -> Result<Vec<RawBulletin>, DeskError> {
    serde_json::from_str(body).map_err(DeskError::Json)
}
