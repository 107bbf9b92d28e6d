//! # chantier-notify
//!
//! Fans domain events out to every user holding a role and records the
//! result in each recipient's notification list.
//!
//! - [`audience`] resolves recipient ids from the cached `users` list.
//! - [`NotificationStore`] prepends entries to user records and tracks reads.
//! - [`NotificationDispatcher`] exposes one operation per domain event and
//!   reports each successful fan-out through an [`Acknowledger`].
//!
//! Delivery is fire-and-forget. Nothing confirms that a notification was
//! seen, and two dispatchers writing at once resolve as last-writer-wins on
//! the whole `users` value.

pub mod audience;

mod ack;
mod dispatcher;
mod error;
mod ids;
mod store;

pub use ack::{ACK_TITLE, Acknowledgement, Acknowledger, TracingAcknowledger};
pub use dispatcher::NotificationDispatcher;
pub use error::NotifyError;
pub use store::NotificationStore;
