use clap::Subcommand;

/// Domain events that fan out to users by role.
#[derive(Clone, Debug, Subcommand)]
pub enum NotifyCommands {
    /// A meeting was created (employees).
    Meeting { title: String },
    /// A document was added (employees).
    Document { title: String },
    /// An incident was reported (employees and responsables).
    Incident { title: String },
    /// A maître d'ouvrage was added (employees).
    MaitreOuvrage { name: String },
    /// A project was created (employees).
    Project { name: String },
    /// A sub-project was created inside a project (employees).
    SubProject {
        name: String,
        #[arg(long)]
        project: String,
    },
    /// An employee was added to or removed from a project.
    Assignment {
        employee_id: String,
        #[arg(long)]
        project: String,
        #[arg(long)]
        sub_project: Option<String>,
        /// Announce a removal instead of an assignment.
        #[arg(long)]
        removed: bool,
    },
}
