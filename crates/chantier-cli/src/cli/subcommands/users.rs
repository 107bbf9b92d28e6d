use std::path::PathBuf;

use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Replace the cached user list with a JSON array read from FILE.
    Import { file: PathBuf },
    /// Show cached users.
    List {
        /// Only users with this exact role tag.
        #[arg(long)]
        role: Option<String>,
    },
}
