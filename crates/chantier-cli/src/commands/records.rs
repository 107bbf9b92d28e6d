use anyhow::Context;
use chantier_core::entities::{MaitreOuvrage, Record};
use chantier_notify::NotificationDispatcher;
use chantier_store::LocalCollection;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{RecordCommands, RecordKind};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AddResponse {
    kind: &'static str,
    id: String,
    created: bool,
    notified: usize,
}

#[derive(Serialize)]
struct RemoveResponse<'a> {
    kind: &'static str,
    id: &'a str,
    removed: bool,
}

/// Handle `chantier records <subcommand>`.
pub fn handle(action: &RecordCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let storage = ctx.storage.clone();
    match action {
        RecordCommands::List { kind } => match kind {
            RecordKind::Invoices => output(&LocalCollection::invoices(storage).list(), flags.format),
            RecordKind::MaitreOuvrages => {
                output(&LocalCollection::maitre_ouvrages(storage).list(), flags.format)
            }
        },
        RecordCommands::Add { kind, json } => {
            let response = match kind {
                RecordKind::Invoices => add(&LocalCollection::invoices(storage), parse_record(json)?)?,
                RecordKind::MaitreOuvrages => add_maitre_ouvrage(
                    &LocalCollection::maitre_ouvrages(storage),
                    parse_record(json)?,
                    &ctx.dispatcher,
                )?,
            };
            output(&response, flags.format)
        }
        RecordCommands::Remove { kind, id } => {
            let (kind, removed) = match kind {
                RecordKind::Invoices => ("invoices", LocalCollection::invoices(storage).remove(id)?),
                RecordKind::MaitreOuvrages => (
                    "maitre-ouvrages",
                    LocalCollection::maitre_ouvrages(storage).remove(id)?,
                ),
            };
            output(&RemoveResponse { kind, id, removed }, flags.format)
        }
    }
}

fn parse_record<T: Record>(json: &str) -> anyhow::Result<T> {
    serde_json::from_str(json).with_context(|| format!("--json is not a valid {} record", T::KIND))
}

fn add<T: Record>(collection: &LocalCollection<T>, record: T) -> anyhow::Result<AddResponse> {
    let id = record.id().to_string();
    let created = collection.get(&id).is_none();
    collection.upsert(record)?;
    Ok(AddResponse {
        kind: T::KIND,
        id,
        created,
        notified: 0,
    })
}

/// New maîtres d'ouvrage are announced to employees; edits are not.
fn add_maitre_ouvrage(
    collection: &LocalCollection<MaitreOuvrage>,
    record: MaitreOuvrage,
    dispatcher: &NotificationDispatcher,
) -> anyhow::Result<AddResponse> {
    let name = record.nom.clone();
    let mut response = add(collection, record)?;
    if response.created {
        response.notified = dispatcher.notify_new_maitre_ouvrage(&name)?;
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chantier_core::UserRecord;
    use chantier_core::entities::Invoice;
    use chantier_notify::{Acknowledgement, Acknowledger, NotificationDispatcher};
    use chantier_store::{LocalCollection, Storage, StorageKey};
    use pretty_assertions::assert_eq;

    use super::{add_maitre_ouvrage, parse_record};

    struct Silent;

    impl Acknowledger for Silent {
        fn acknowledge(&self, _ack: &Acknowledgement) {}
    }

    const OPGI: &str = r#"{"id":"mo-1","nom":"OPGI Oran","type":"public"}"#;

    fn storage_with_employee() -> Storage {
        let storage = Storage::in_memory();
        storage
            .write_json(StorageKey::Users, &[UserRecord::new("1", "employee", "Amine")])
            .unwrap();
        storage
    }

    #[test]
    fn new_maitre_ouvrage_is_announced_once() {
        let storage = storage_with_employee();
        let dispatcher = NotificationDispatcher::with_acknowledger(storage.clone(), Arc::new(Silent));
        let collection = LocalCollection::maitre_ouvrages(storage);

        let first = add_maitre_ouvrage(&collection, parse_record(OPGI).unwrap(), &dispatcher).unwrap();
        assert!(first.created);
        assert_eq!(first.notified, 1);

        let edit = add_maitre_ouvrage(&collection, parse_record(OPGI).unwrap(), &dispatcher).unwrap();
        assert!(!edit.created);
        assert_eq!(edit.notified, 0);

        assert_eq!(dispatcher.store().unread_count("1"), 1);
        assert_eq!(collection.list().len(), 1);
    }

    #[test]
    fn invalid_record_json_is_rejected() {
        let error = parse_record::<Invoice>(r#"{"id":"f-1"}"#).err().unwrap();
        assert!(error.to_string().contains("invoice"));
    }
}
