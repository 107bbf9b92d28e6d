//! User role tags.
//!
//! Roles form an open set: the backend may hand out tags this crate does not
//! know about. Those are kept verbatim in [`Role::Other`] so a cached user list
//! round-trips through the store without losing information.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ADMIN: &str = "admin";
pub const CHEF: &str = "chef";
pub const EMPLOYEE: &str = "employee";
pub const RESPONSABLE: &str = "responsable";

/// Role tag carried by a user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Chef,
    Employee,
    Responsable,
    Other(String),
}

impl Default for Role {
    /// The empty tag, used when a record carries no role. Matches no resolver.
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => ADMIN,
            Self::Chef => CHEF,
            Self::Employee => EMPLOYEE,
            Self::Responsable => RESPONSABLE,
            Self::Other(tag) => tag,
        }
    }

    /// Exact, case-sensitive tag comparison.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        self.as_str() == tag
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            ADMIN => Self::Admin,
            CHEF => Self::Chef,
            EMPLOYEE => Self::Employee,
            RESPONSABLE => Self::Responsable,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
