use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Api { action } => commands::api::handle(&action, ctx, flags).await,
        Commands::Notify { action } => commands::notify::handle(&action, ctx, flags),
        Commands::Notifications { action } => commands::notifications::handle(&action, ctx, flags),
        Commands::Users { action } => commands::users::handle(&action, ctx, flags),
        Commands::Records { action } => commands::records::handle(&action, ctx, flags),
    }
}
