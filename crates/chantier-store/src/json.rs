//! JSON views over raw store values.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Storage, StorageKey, StoreError};

impl Storage {
    /// Parse the value under `key` as JSON.
    ///
    /// `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] when the value does not parse as `T`,
    /// or propagates backend read failures.
    pub fn try_read_json<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                location: key.as_str().to_string(),
                reason: e.to_string(),
            })
    }

    /// Read a cached JSON list, treating every failure as an empty list.
    ///
    /// Absent, malformed and unreadable content all yield `[]`; failures are
    /// logged, never returned.
    #[must_use]
    pub fn read_json_list<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
        match self.try_read_json::<Vec<T>>(key) {
            Ok(list) => list.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(key = key.as_str(), %error, "cached list unreadable; using empty list");
                Vec::new()
            }
        }
    }

    /// Read a cached JSON array one element at a time.
    ///
    /// Absent or non-array content yields `[]` like [`Self::read_json_list`].
    /// Elements that do not parse as `T` are skipped with a warning and the
    /// rest are returned in order.
    #[must_use]
    pub fn read_json_records<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
        self.read_json_list::<Value>(key)
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| match serde_json::from_value(element) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(key = key.as_str(), index, %error, "skipping unreadable record");
                    None
                }
            })
            .collect()
    }

    /// Serialize `value` and replace the content under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] or propagates backend write failures.
    pub fn write_json<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}
