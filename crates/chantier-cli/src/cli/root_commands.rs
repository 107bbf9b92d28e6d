use clap::Subcommand;

use crate::cli::subcommands::{
    ApiCommands, AuthCommands, NotificationCommands, NotifyCommands, RecordCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session management against the backend.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Raw authenticated requests.
    Api {
        #[command(subcommand)]
        action: ApiCommands,
    },
    /// Announce a domain event to the users concerned.
    Notify {
        #[command(subcommand)]
        action: NotifyCommands,
    },
    /// Per-user notification lists.
    Notifications {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// The cached user list that drives notification fan-out.
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Records kept only in the local store.
    Records {
        #[command(subcommand)]
        action: RecordCommands,
    },
}
