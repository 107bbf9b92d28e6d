#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chantier_core::UserRecord;
use chantier_notify::{Acknowledgement, Acknowledger, NotificationDispatcher};
use chantier_store::{MemoryStore, Storage, StorageKey};

/// Collects acknowledgments instead of displaying them.
#[derive(Debug, Default)]
pub struct RecordingAcknowledger {
    seen: Mutex<Vec<Acknowledgement>>,
}

impl RecordingAcknowledger {
    pub fn seen(&self) -> Vec<Acknowledgement> {
        self.seen.lock().unwrap().clone()
    }
}

impl Acknowledger for RecordingAcknowledger {
    fn acknowledge(&self, ack: &Acknowledgement) {
        self.seen.lock().unwrap().push(ack.clone());
    }
}

pub fn storage_with(users: &[UserRecord]) -> Storage {
    let raw = serde_json::to_string(users).unwrap();
    Storage::new(MemoryStore::with_entries([(StorageKey::Users, raw)]))
}

pub fn dispatcher(storage: &Storage) -> (NotificationDispatcher, Arc<RecordingAcknowledger>) {
    let acks = Arc::new(RecordingAcknowledger::default());
    let dispatcher = NotificationDispatcher::with_acknowledger(storage.clone(), acks.clone());
    (dispatcher, acks)
}

pub fn users(storage: &Storage) -> Vec<UserRecord> {
    storage.try_read_json(StorageKey::Users).unwrap().unwrap()
}

pub fn team() -> Vec<UserRecord> {
    vec![
        UserRecord::new("1", "employee", "Amine"),
        UserRecord::new("2", "chef", "Nadia"),
        UserRecord::new("3", "employee", "Sara"),
        UserRecord::new("4", "responsable", "Yacine"),
    ]
}
