use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chantier_api::{ApiClient, SessionEvent};
use chantier_config::ChantierConfig;
use chantier_notify::{Acknowledgement, Acknowledger, NotificationDispatcher};
use chantier_store::{FileStore, Storage};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ChantierConfig,
    pub store_path: PathBuf,
    pub storage: Storage,
    pub api: ApiClient,
    pub dispatcher: NotificationDispatcher,
}

impl AppContext {
    /// Open the file store at `store_path` and wire both components to it.
    pub fn init(config: ChantierConfig, store_path: PathBuf, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let storage = Storage::new(FileStore::open(&store_path));
        let api = ApiClient::new(&config.api, storage.clone()).context("failed to build API client")?;
        let dispatcher = NotificationDispatcher::with_acknowledger(
            storage.clone(),
            Arc::new(TerminalAcknowledger { quiet: flags.quiet }),
        );
        tracing::debug!(store = %store_path.display(), base_url = api.base_url(), "context ready");

        Ok(Self {
            config,
            store_path,
            storage,
            api,
            dispatcher,
        })
    }
}

/// Prints fan-out acknowledgments to stderr so stdout stays machine-readable.
struct TerminalAcknowledger {
    quiet: bool,
}

impl Acknowledger for TerminalAcknowledger {
    fn acknowledge(&self, ack: &Acknowledgement) {
        if !self.quiet {
            eprintln!("{}: {}", ack.title, ack.description);
        }
    }
}

/// Drain session events raised while a command ran and warn about a
/// rejected session.
pub fn report_session_events(events: &mut broadcast::Receiver<SessionEvent>, flags: &GlobalFlags) {
    loop {
        match events.try_recv() {
            Ok(SessionEvent::Unauthorized) => {
                if !flags.quiet {
                    eprintln!(
                        "warning: the backend rejected the session; the stored token was cleared. Run `chantier auth login`."
                    );
                }
            }
            Ok(_) | Err(TryRecvError::Lagged(_)) => {}
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
}
