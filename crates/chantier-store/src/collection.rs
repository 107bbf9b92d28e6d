use std::marker::PhantomData;

use chantier_core::entities::{Invoice, MaitreOuvrage, Record};

use crate::{Storage, StorageKey, StoreError};

/// A JSON array of records kept under one store key.
///
/// Reads are lenient (see [`Storage::read_json_list`]); writes refuse to
/// replace a list that exists but does not parse.
#[derive(Debug, Clone)]
pub struct LocalCollection<T> {
    storage: Storage,
    key: StorageKey,
    _record: PhantomData<fn() -> T>,
}

impl LocalCollection<MaitreOuvrage> {
    #[must_use]
    pub const fn maitre_ouvrages(storage: Storage) -> Self {
        Self::new(storage, StorageKey::MaitreOuvrages)
    }
}

impl LocalCollection<Invoice> {
    #[must_use]
    pub const fn invoices(storage: Storage) -> Self {
        Self::new(storage, StorageKey::Invoices)
    }
}

impl<T> LocalCollection<T> {
    #[must_use]
    pub const fn new(storage: Storage, key: StorageKey) -> Self {
        Self {
            storage,
            key,
            _record: PhantomData,
        }
    }

    #[must_use]
    pub const fn key(&self) -> StorageKey {
        self.key
    }
}

impl<T: Record> LocalCollection<T> {
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.storage.read_json_list(self.key)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<T> {
        self.list().into_iter().find(|record| record.id() == id)
    }

    /// Replace the record with the same id in place, or insert it first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the existing list does not parse,
    /// or propagates backend failures.
    pub fn upsert(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.load_strict()?;
        match records.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(existing) => *existing = record,
            None => records.insert(0, record),
        }
        self.save(&records)
    }

    /// Remove the record with `id`. Returns whether one was removed.
    ///
    /// # Errors
    ///
    /// Same as [`Self::upsert`].
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.load_strict()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }

    /// Replace the whole list.
    ///
    /// # Errors
    ///
    /// Propagates serialization and backend failures.
    pub fn replace_all(&self, records: &[T]) -> Result<(), StoreError> {
        self.save(records)
    }

    fn load_strict(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.storage.try_read_json(self.key)?.unwrap_or_default())
    }

    fn save(&self, records: &[T]) -> Result<(), StoreError> {
        self.storage.write_json(self.key, records)?;
        if let Some(event) = self.key.change_event() {
            self.storage.events().publish(event);
        }
        tracing::debug!(key = self.key.as_str(), kind = T::KIND, len = records.len(), "collection saved");
        Ok(())
    }
}
