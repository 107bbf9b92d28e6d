use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotifyCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct NotifyResponse {
    event: &'static str,
    recipients: usize,
}

/// Handle `chantier notify <event>`.
pub fn handle(action: &NotifyCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dispatcher = &ctx.dispatcher;
    let (event, recipients) = match action {
        NotifyCommands::Meeting { title } => ("meeting", dispatcher.notify_new_meeting(title)?),
        NotifyCommands::Document { title } => ("document", dispatcher.notify_new_document(title)?),
        NotifyCommands::Incident { title } => ("incident", dispatcher.notify_new_incident(title)?),
        NotifyCommands::MaitreOuvrage { name } => {
            ("maitre-ouvrage", dispatcher.notify_new_maitre_ouvrage(name)?)
        }
        NotifyCommands::Project { name } => ("project", dispatcher.notify_new_project(name)?),
        NotifyCommands::SubProject { name, project } => {
            ("sub-project", dispatcher.notify_new_sub_project(name, project)?)
        }
        NotifyCommands::Assignment {
            employee_id,
            project,
            sub_project,
            removed,
        } => (
            "assignment",
            dispatcher.notify_project_assignment(employee_id, project, sub_project.as_deref(), !removed)?,
        ),
    };

    if recipients == 0 {
        tracing::warn!(event, "no recipients; nothing was sent");
    }
    output(&NotifyResponse { event, recipients }, flags.format)
}
