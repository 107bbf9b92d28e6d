use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::{KeyValueStore, StorageKey, StoreError};

type Entries = BTreeMap<String, String>;

/// Store persisted as one JSON object file.
///
/// Every operation re-reads the file so writes from other processes are seen.
/// Every write rewrites the whole file: two processes writing concurrently
/// race, and the last `rename` wins. Within one process writes are serialized.
/// Entries under names outside [`StorageKey`] are preserved untouched.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl FileStore {
    /// Open (lazily) the store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            location: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| StoreError::Io { path, source }
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty())
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
            // Only the directory we just created is made private.
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(io_err(&tmp))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600)).map_err(io_err(&tmp))?;
        }

        fs::rename(&tmp, &self.path).map_err(io_err(&self.path))
    }

    fn modify(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key.as_str()))
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        self.modify(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: StorageKey) -> Result<(), StoreError> {
        self.modify(|entries| {
            entries.remove(key.as_str());
        })
    }
}
