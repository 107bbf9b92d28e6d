//! Notification requests and stored per-recipient entries.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity tag shown by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical notification addressed to a set of users.
///
/// Built by the dispatcher and never mutated afterwards. The recipient set is
/// ordered and duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub recipient_ids: BTreeSet<String>,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub link: Option<String>,
}

/// The entry written into a recipient's notification list.
///
/// Entries written by other clients are read tolerantly: `null` fields take
/// their defaults, and `type`, `createdAt` and unknown fields are kept
/// verbatim so rewriting the list never alters them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNotification {
    #[serde(deserialize_with = "crate::de::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub message: String,
    /// Severity tag as stored. See [`Self::severity`].
    #[serde(rename = "type", default, deserialize_with = "crate::de::null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub read: bool,
    /// Entries created here use RFC 3339 UTC with milliseconds.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoredNotification {
    /// Materialize `notification` for a single recipient. Starts unread.
    #[must_use]
    pub fn for_recipient(
        notification: &Notification,
        user_id: &str,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.severity.as_str().to_string(),
            read: false,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            link: notification.link.clone(),
            extra: Map::new(),
        }
    }

    /// The stored tag as a [`Severity`], `None` for tags this crate does not know.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_tag(&self.kind)
    }
}
