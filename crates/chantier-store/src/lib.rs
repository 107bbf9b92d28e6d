//! # chantier-store
//!
//! The persistent key-value store shared by the API client and the
//! notification dispatcher.
//!
//! Every key lives in [`StorageKey`]. Backends implement [`KeyValueStore`];
//! components receive a cloneable [`Storage`] handle that also carries the
//! [`StoreEvents`] channel used to tell listeners a key changed.
//!
//! # Write semantics
//!
//! There are no transactions, no locks spanning processes and no versions.
//! Every write replaces the whole value under a key, so two writers racing on
//! the same key resolve as last-writer-wins. Callers that read-modify-write a
//! JSON list (notifications, local collections) accept that a concurrent
//! writer can overwrite their change.

mod collection;
mod error;
mod events;
mod file;
mod json;
mod keys;
mod memory;

pub use collection::LocalCollection;
pub use error::StoreError;
pub use events::{StoreEvent, StoreEvents};
pub use file::FileStore;
pub use keys::StorageKey;
pub use memory::MemoryStore;

use std::sync::Arc;

use tokio::sync::broadcast;

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn get(&self, key: StorageKey) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn set(&self, key: StorageKey, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn remove(&self, key: StorageKey) -> Result<(), StoreError>;
}

/// Shared handle to a store backend plus its change-event channel.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
    events: StoreEvents,
}

impl Storage {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    #[must_use]
    pub fn from_arc(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            events: StoreEvents::default(),
        }
    }

    /// Fresh, empty in-process store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// # Errors
    ///
    /// Propagates backend read failures.
    pub fn get(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        self.backend.get(key)
    }

    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn set(&self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        self.backend.set(key, value)
    }

    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn remove(&self, key: StorageKey) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    #[must_use]
    pub const fn events(&self) -> &StoreEvents {
        &self.events
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
