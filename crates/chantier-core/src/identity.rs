use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Denormalized profile persisted next to the session token on login.
///
/// Read back from the store only; the backend remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub token: String,
    pub role: Option<Role>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}
