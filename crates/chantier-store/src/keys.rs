//! Every key the application reads or writes.

use std::fmt;

use crate::events::StoreEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    /// Session bearer token.
    Token,
    UserRole,
    UserId,
    UserName,
    UserEmail,
    /// JSON array of cached user records, each carrying its notifications.
    Users,
    /// JSON array of invoices (local-only).
    Invoices,
    /// JSON array of maîtres d'ouvrage (local-only).
    MaitreOuvrages,
}

impl StorageKey {
    /// The keys written on login and cleared on logout.
    pub const SESSION: [Self; 5] = [
        Self::Token,
        Self::UserRole,
        Self::UserId,
        Self::UserName,
        Self::UserEmail,
    ];

    pub const ALL: [Self; 8] = [
        Self::Token,
        Self::UserRole,
        Self::UserId,
        Self::UserName,
        Self::UserEmail,
        Self::Users,
        Self::Invoices,
        Self::MaitreOuvrages,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::UserRole => "userRole",
            Self::UserId => "userId",
            Self::UserName => "userName",
            Self::UserEmail => "userEmail",
            Self::Users => "users",
            Self::Invoices => "invoices",
            Self::MaitreOuvrages => "maitreOuvrages",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Event published after a whole-value write to this key, if listeners
    /// are expected to re-read it.
    #[must_use]
    pub fn change_event(self) -> Option<StoreEvent> {
        match self {
            Self::MaitreOuvrages => Some(StoreEvent::MaitreOuvragesUpdated),
            _ => None,
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
