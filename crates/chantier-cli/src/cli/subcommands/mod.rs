pub mod api;
pub mod auth;
pub mod notifications;
pub mod notify;
pub mod records;
pub mod users;

pub use api::ApiCommands;
pub use auth::{AuthCommands, AuthLoginArgs};
pub use notifications::NotificationCommands;
pub use notify::NotifyCommands;
pub use records::{RecordCommands, RecordKind};
pub use users::UserCommands;
