//! One-shot cross-navigation messages.

use std::sync::Arc;

use tokio::sync::RwLock;

/// A transient slot holding a single localized message for one-time
/// display.
///
/// A forced navigation (authorization-failure redirect) stashes a message
/// here; the login page reads and clears it on mount, so the message
/// survives the redirect but not a subsequent reload.
#[derive(Debug, Clone, Default)]
pub struct FlashSlot {
    slot: Arc<RwLock<Option<String>>>,
}

impl FlashSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stashes a message, replacing any previous one.
    pub async fn stash(&self, message: impl Into<String>) {
        *self.slot.write().await = Some(message.into());
    }

    /// Reads and clears the stashed message.
    pub async fn take(&self) -> Option<String> {
        self.slot.write().await.take()
    }
}
