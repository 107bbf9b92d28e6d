use std::path::Path;

use anyhow::Context;
use chantier_core::UserRecord;
use chantier_store::StorageKey;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ImportResponse {
    imported: usize,
}

#[derive(Serialize)]
struct UserSummary {
    id: String,
    name: String,
    email: String,
    role: String,
    unread: usize,
}

/// Handle `chantier users <subcommand>`.
pub fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Import { file } => {
            let users = read_users(file)?;
            ctx.storage.write_json(StorageKey::Users, &users)?;
            output(&ImportResponse { imported: users.len() }, flags.format)
        }
        UserCommands::List { role } => {
            let users: Vec<UserSummary> = ctx
                .storage
                .read_json_list::<UserRecord>(StorageKey::Users)
                .into_iter()
                .filter(|user| role.as_deref().is_none_or(|tag| user.role.matches(tag)))
                .map(|user| UserSummary {
                    unread: user.unread_count(),
                    role: user.role.to_string(),
                    id: user.id,
                    name: user.name,
                    email: user.email,
                })
                .collect();
            output(&users, flags.format)
        }
    }
}

fn read_users(path: &Path) -> anyhow::Result<Vec<UserRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read users file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of users", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::read_users;

    #[test]
    fn import_file_accepts_backend_shapes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"name":"Amine","email":"a@x.dz","role":"employee"}},{{"id":"2","role":"chef","telephone":"0555"}}]"#
        )
        .unwrap();

        let users = read_users(file.path()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[1].extra["telephone"], "0555");
    }

    #[test]
    fn import_file_must_be_a_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id":"1"}}"#).unwrap();
        assert!(read_users(file.path()).is_err());
    }
}
