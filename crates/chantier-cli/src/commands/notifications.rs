use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct UnreadResponse<'a> {
    user_id: &'a str,
    unread: usize,
}

#[derive(Serialize)]
struct MarkReadResponse<'a> {
    user_id: &'a str,
    notification_id: &'a str,
    updated: bool,
}

#[derive(Serialize)]
struct MarkAllReadResponse<'a> {
    user_id: &'a str,
    updated: usize,
}

/// Handle `chantier notifications <subcommand>`.
pub fn handle(action: &NotificationCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = ctx.dispatcher.store();
    match action {
        NotificationCommands::List { user_id } => output(&store.for_user(user_id), flags.format),
        NotificationCommands::Unread { user_id } => output(
            &UnreadResponse {
                user_id,
                unread: store.unread_count(user_id),
            },
            flags.format,
        ),
        NotificationCommands::Read {
            user_id,
            notification_id,
        } => {
            let updated = store.mark_read(user_id, notification_id)?;
            output(
                &MarkReadResponse {
                    user_id,
                    notification_id,
                    updated,
                },
                flags.format,
            )
        }
        NotificationCommands::ReadAll { user_id } => {
            let updated = store.mark_all_read(user_id)?;
            output(&MarkAllReadResponse { user_id, updated }, flags.format)
        }
    }
}
