use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use super::snapshot::{AppSnapshot, PersistedState, StorageEntry, StorageEnvelope};

/// Durable home for the application snapshot. The store writes the whole snapshot after
/// every mutation and reads it once at startup.
pub trait SnapshotPersistence: Send + Sync {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError>;
    fn save(&self, snapshot: &AppSnapshot) -> Result<(), PersistenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to access snapshot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("snapshot at {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Writes the snapshot as one JSON document under the shared storage key.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotPersistence for JsonFilePersistence {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let envelope: StorageEnvelope<PersistedState> =
            serde_json::from_slice(&raw).map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(envelope.entry.state))
    }

    fn save(&self, snapshot: &AppSnapshot) -> Result<(), PersistenceError> {
        let envelope = StorageEnvelope {
            entry: StorageEntry { state: snapshot },
        };
        let encoded = serde_json::to_vec_pretty(&envelope)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        // Write next to the target and rename so a crash never leaves a truncated file.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, encoded).map_err(|err| self.io_error(err))?;
        fs::rename(&staging, &self.path).map_err(|err| self.io_error(err))
    }
}

/// Keeps the last saved snapshot in memory. Used by tests and when no state path is set.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    saved: Mutex<Option<AppSnapshot>>,
    saves: Mutex<usize>,
}

impl MemoryPersistence {
    pub fn last_saved(&self) -> Option<AppSnapshot> {
        self.saved.lock().expect("persistence mutex poisoned").clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().expect("persistence mutex poisoned")
    }
}

impl SnapshotPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        Ok(None)
    }

    fn save(&self, snapshot: &AppSnapshot) -> Result<(), PersistenceError> {
        *self.saved.lock().expect("persistence mutex poisoned") = Some(snapshot.clone());
        *self.saves.lock().expect("persistence mutex poisoned") += 1;
        Ok(())
    }
}
