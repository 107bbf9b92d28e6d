//! Named change events, the only cross-component signal in the store.
//!
//! A listener receives the event name and re-reads the key itself; events do
//! not carry the new value.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The `maitreOuvrages` list was rewritten.
    MaitreOuvragesUpdated,
    /// Notifications were added or marked read for these users.
    NotificationsUpdated { user_ids: Vec<String> },
}

impl StoreEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MaitreOuvragesUpdated => "maitreOuvragesUpdated",
            Self::NotificationsUpdated { .. } => "notificationsUpdated",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreEvents {
    tx: broadcast::Sender<StoreEvent>,
}

impl Default for StoreEvents {
    fn default() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }
}

impl StoreEvents {
    /// Publish to current listeners. Returns how many received it; having no
    /// listener is normal and not an error.
    pub fn publish(&self, event: StoreEvent) -> usize {
        tracing::debug!(event = event.name(), "store event");
        self.tx.send(event).unwrap_or(0)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }
}
