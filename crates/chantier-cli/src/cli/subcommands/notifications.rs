use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List a user's notifications, newest first.
    List { user_id: String },
    /// Count a user's unread notifications.
    Unread { user_id: String },
    /// Mark one notification read.
    Read {
        user_id: String,
        notification_id: String,
    },
    /// Mark all of a user's notifications read.
    ReadAll { user_id: String },
}
