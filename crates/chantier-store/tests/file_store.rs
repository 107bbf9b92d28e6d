//! File-backed store behaviour across handles.

use chantier_store::{FileStore, KeyValueStore, Storage, StorageKey};
use pretty_assertions::assert_eq;

#[test]
fn values_survive_reopen() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("store.json");

    FileStore::open(&path).set(StorageKey::Token, "T1").unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get(StorageKey::Token).unwrap().as_deref(), Some("T1"));
}

#[test]
fn last_writer_wins_between_handles() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("store.json");
    let first = Storage::new(FileStore::open(&path));
    let second = Storage::new(FileStore::open(&path));

    // Both read the same list, then write their own version of it.
    let mut from_first: Vec<String> = first.read_json_list(StorageKey::Invoices);
    let mut from_second: Vec<String> = second.read_json_list(StorageKey::Invoices);
    from_first.push("f-1".into());
    from_second.push("f-2".into());
    first.write_json(StorageKey::Invoices, &from_first).unwrap();
    second.write_json(StorageKey::Invoices, &from_second).unwrap();

    let seen: Vec<String> = first.read_json_list(StorageKey::Invoices);
    assert_eq!(seen, vec!["f-2".to_string()]);
}

#[test]
fn remove_only_touches_its_key() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = FileStore::open(tmp.path().join("store.json"));
    store.set(StorageKey::Token, "T1").unwrap();
    store.set(StorageKey::Users, "[]").unwrap();

    store.remove(StorageKey::Token).unwrap();

    assert_eq!(store.get(StorageKey::Token).unwrap(), None);
    assert_eq!(store.get(StorageKey::Users).unwrap().as_deref(), Some("[]"));
}
