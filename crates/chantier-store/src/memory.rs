use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{KeyValueStore, StorageKey, StoreError};

/// In-process store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StorageKey, V)>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(entries.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<StorageKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StoreError> {
        self.lock().remove(&key);
        Ok(())
    }
}
