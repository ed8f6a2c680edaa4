//! Account-summary values keyed by gateway tag.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::models::AccountValue;

/// Thread-shared map of account-summary tags to their latest value.
///
/// Tags are the gateway's own labels (`NetLiquidation`, `BuyingPower`,
/// `TotalCashValue`, ...). Updates are last-write-wins per tag.
#[derive(Debug, Clone, Default)]
pub struct AccountPanel {
    inner: Arc<Mutex<HashMap<String, AccountValue>>>,
}

impl AccountPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest value for `tag`.
    pub fn apply(&self, tag: impl Into<String>, value: AccountValue) {
        self.lock().insert(tag.into(), value);
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<AccountValue> {
        self.lock().get(tag).cloned()
    }

    /// Owned copy of the whole panel.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, AccountValue> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, AccountValue>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
