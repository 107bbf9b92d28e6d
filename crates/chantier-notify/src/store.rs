use chantier_core::{Notification, StoredNotification, UserRecord};
use chantier_store::{Storage, StorageKey, StoreError, StoreEvent};
use chrono::Utc;
use serde_json::Value;

use crate::error::NotifyError;
use crate::ids::notification_id;

/// Per-user notification lists, embedded in the cached `users` records.
///
/// Every write reloads the list, changes the records concerned, writes it
/// back whole and then publishes [`StoreEvent::NotificationsUpdated`]. A
/// missing or malformed list is never overwritten, and a record that does
/// not parse is written back exactly as it was read.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    storage: Storage,
}

impl NotificationStore {
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Prepend `notification` to each recipient present in the list.
    ///
    /// Returns the number of recipient ids requested, or 0 when the list is
    /// absent or unreadable. Recipients missing from the list are skipped.
    ///
    /// # Errors
    ///
    /// Propagates store read/write failures.
    pub fn add(&self, notification: &Notification) -> Result<usize, NotifyError> {
        let now = Utc::now();
        let user_ids: Vec<String> = notification.recipient_ids.iter().cloned().collect();
        let stored = self.edit_users(user_ids, |user| {
            if !notification.recipient_ids.contains(&user.id) {
                return Ok(0);
            }
            let entry = StoredNotification::for_recipient(notification, &user.id, notification_id(now)?, now);
            user.notifications.insert(0, entry);
            Ok(1)
        })?;
        let Some(stored) = stored else {
            return Ok(0);
        };

        tracing::debug!(
            recipients = notification.recipient_ids.len(),
            stored,
            title = %notification.title,
            "notification stored"
        );
        Ok(notification.recipient_ids.len())
    }

    /// Notifications of `user_id`, newest first. Empty for unknown users.
    #[must_use]
    pub fn for_user(&self, user_id: &str) -> Vec<StoredNotification> {
        self.storage
            .read_json_records::<UserRecord>(StorageKey::Users)
            .into_iter()
            .find(|u| u.id == user_id)
            .map(|u| u.notifications)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn unread_count(&self, user_id: &str) -> usize {
        self.for_user(user_id).iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Returns `false` when the user or the
    /// notification does not exist; nothing is written in that case.
    ///
    /// # Errors
    ///
    /// Propagates store read/write failures.
    pub fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<bool, NotifyError> {
        let found = self.edit_users(vec![user_id.to_string()], |user| {
            if user.id != user_id {
                return Ok(0);
            }
            let mut found = 0;
            for entry in user.notifications.iter_mut().filter(|n| n.id == notification_id) {
                entry.read = true;
                found += 1;
            }
            Ok(found)
        })?;
        Ok(found.is_some_and(|n| n > 0))
    }

    /// Mark every notification of `user_id` read. Returns how many changed.
    ///
    /// # Errors
    ///
    /// Propagates store read/write failures.
    pub fn mark_all_read(&self, user_id: &str) -> Result<usize, NotifyError> {
        let changed = self.edit_users(vec![user_id.to_string()], |user| {
            if user.id != user_id {
                return Ok(0);
            }
            let mut changed = 0;
            for entry in user.notifications.iter_mut().filter(|n| !n.read) {
                entry.read = true;
                changed += 1;
            }
            Ok(changed)
        })?;
        Ok(changed.unwrap_or(0))
    }

    /// Run `edit` over every readable user record and write back the ones it
    /// reports as changed. Returns the summed change count, `None` when the
    /// list is absent or not a JSON array.
    fn edit_users(
        &self,
        user_ids: Vec<String>,
        mut edit: impl FnMut(&mut UserRecord) -> Result<usize, NotifyError>,
    ) -> Result<Option<usize>, NotifyError> {
        let Some(mut users) = self.load()? else {
            return Ok(None);
        };

        let mut changed = 0;
        for (index, raw) in users.iter_mut().enumerate() {
            let mut user: UserRecord = match serde_json::from_value(raw.clone()) {
                Ok(user) => user,
                Err(error) => {
                    tracing::warn!(index, %error, "user record unreadable; left as stored");
                    continue;
                }
            };
            let edits = edit(&mut user)?;
            if edits > 0 {
                *raw = serde_json::to_value(&user).map_err(StoreError::from)?;
                changed += edits;
            }
        }

        if changed > 0 {
            self.storage.write_json(StorageKey::Users, &users)?;
            self.storage
                .events()
                .publish(StoreEvent::NotificationsUpdated { user_ids });
        }
        Ok(Some(changed))
    }

    fn load(&self) -> Result<Option<Vec<Value>>, NotifyError> {
        match self.storage.try_read_json::<Vec<Value>>(StorageKey::Users) {
            Ok(users) => Ok(users),
            Err(StoreError::Corrupt { location, reason }) => {
                tracing::warn!(key = %location, %reason, "users list unreadable; notifications not stored");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }
}
