use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::notification::StoredNotification;
use crate::role::Role;

/// A cached user record as kept under the `users` store key.
///
/// Fields this crate does not model (telephone, status, avatar, ...) are
/// carried in `extra` so rewriting the list never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "crate::de::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub email: String,
    #[serde(
        default,
        deserialize_with = "crate::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub notifications: Vec<StoredNotification>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, role: impl Into<Role>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            name: name.into(),
            email: String::new(),
            notifications: Vec::new(),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
