pub mod api;
pub mod auth;
pub mod dispatch;
pub mod notifications;
pub mod notify;
pub mod records;
pub mod users;
