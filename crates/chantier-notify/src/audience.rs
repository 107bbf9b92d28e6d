//! Recipient resolution from the cached `users` list.
//!
//! Resolution never fails. Records that do not parse are skipped with a
//! warning; an absent or malformed list yields an empty audience, which
//! turns the calling dispatch into a no-op.

use std::collections::BTreeSet;

use chantier_core::UserRecord;
use chantier_core::role::{EMPLOYEE, RESPONSABLE};
use chantier_store::{Storage, StorageKey};

/// Ids of every cached user whose role tag equals `role` exactly.
#[must_use]
pub fn ids_with_role(storage: &Storage, role: &str) -> BTreeSet<String> {
    storage
        .read_json_records::<UserRecord>(StorageKey::Users)
        .into_iter()
        .filter(|user| user.role.matches(role))
        .map(|user| user.id)
        .collect()
}

#[must_use]
pub fn employee_ids(storage: &Storage) -> BTreeSet<String> {
    ids_with_role(storage, EMPLOYEE)
}

#[must_use]
pub fn responsable_ids(storage: &Storage) -> BTreeSet<String> {
    ids_with_role(storage, RESPONSABLE)
}
