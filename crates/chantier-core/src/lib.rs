//! # chantier-core
//!
//! Core types shared across all Chantier crates:
//! - User records and the open set of role tags that drive notification fan-out
//! - Notification requests and the per-recipient entries kept in the store
//! - Domain records (invoices, marchés, meetings, incidents, documents,
//!   maîtres d'ouvrage) persisted remotely or in the local store
//! - The denormalized session profile written on login

pub mod de;
pub mod entities;
pub mod identity;
pub mod notification;
pub mod role;
pub mod user;

pub use identity::SessionProfile;
pub use notification::{Notification, Severity, StoredNotification};
pub use role::Role;
pub use user::UserRecord;
