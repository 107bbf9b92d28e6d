use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `chantier` binary.
#[derive(Debug, Parser)]
#[command(name = "chantier", version, about = "Chantier - site-management client tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Local store file (defaults to storage.path, then ~/.chantier/store.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            store: self.store.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{
        ApiCommands, AuthCommands, NotificationCommands, NotifyCommands, RecordKind,
        RecordCommands, UserCommands,
    };
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "chantier",
            "--format",
            "raw",
            "--store",
            "/tmp/s.json",
            "--verbose",
            "auth",
            "status",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert_eq!(
            cli.global_flags().store.as_deref(),
            Some(std::path::Path::new("/tmp/s.json"))
        );
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["chantier", "auth", "logout", "--quiet"])
            .expect("cli should parse");
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["chantier", "--format", "table", "auth", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn login_requires_email_and_password() {
        assert!(Cli::try_parse_from(["chantier", "auth", "login", "--email", "a@x.com"]).is_err());

        let cli = Cli::try_parse_from([
            "chantier", "auth", "login", "--email", "a@x.com", "--password", "secret",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.email, "a@x.com");
        assert_eq!(args.password, "secret");
    }

    #[test]
    fn api_get_collects_repeated_params() {
        let cli = Cli::try_parse_from([
            "chantier", "api", "get", "/projets/", "--param", "page=2", "--param", "q=tour",
        ])
        .expect("cli should parse");
        let Commands::Api {
            action: ApiCommands::Get { path, params },
        } = cli.command
        else {
            panic!("expected api get");
        };
        assert_eq!(path, "/projets/");
        assert_eq!(params, ["page=2", "q=tour"]);
    }

    #[test]
    fn notify_sub_project_requires_parent() {
        assert!(Cli::try_parse_from(["chantier", "notify", "sub-project", "Lot 2"]).is_err());

        let cli = Cli::try_parse_from([
            "chantier",
            "notify",
            "sub-project",
            "Lot 2",
            "--project",
            "Tower A",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Notify {
                action: NotifyCommands::SubProject { .. }
            }
        ));
    }

    #[test]
    fn notify_assignment_flags() {
        let cli = Cli::try_parse_from([
            "chantier",
            "notify",
            "assignment",
            "7",
            "--project",
            "Tower A",
            "--removed",
        ])
        .expect("cli should parse");
        let Commands::Notify {
            action:
                NotifyCommands::Assignment {
                    employee_id,
                    project,
                    sub_project,
                    removed,
                },
        } = cli.command
        else {
            panic!("expected notify assignment");
        };
        assert_eq!(employee_id, "7");
        assert_eq!(project, "Tower A");
        assert_eq!(sub_project, None);
        assert!(removed);
    }

    #[test]
    fn notifications_read_takes_two_ids() {
        let cli = Cli::try_parse_from(["chantier", "notifications", "read", "3", "notif-1-abc"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Notifications {
                action: NotificationCommands::Read { .. }
            }
        ));
    }

    #[test]
    fn users_list_role_filter_is_optional() {
        let cli = Cli::try_parse_from(["chantier", "users", "list", "--role", "employee"])
            .expect("cli should parse");
        let Commands::Users {
            action: UserCommands::List { role },
        } = cli.command
        else {
            panic!("expected users list");
        };
        assert_eq!(role.as_deref(), Some("employee"));
    }

    #[test]
    fn record_kinds_use_kebab_case() {
        let cli = Cli::try_parse_from(["chantier", "records", "list", "maitre-ouvrages"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Records {
                action: RecordCommands::List {
                    kind: RecordKind::MaitreOuvrages
                }
            }
        ));
        assert!(Cli::try_parse_from(["chantier", "records", "list", "meetings"]).is_err());
    }
}
