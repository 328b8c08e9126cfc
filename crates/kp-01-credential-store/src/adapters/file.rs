//! # File-Backed Credential Store
//!
//! One JSON document per namespace:
//!
//! ```json
//! { "version": 1, "slots": { "device_key": "..." } }
//! ```
//!
//! ## Concurrency
//!
//! Every operation takes an exclusive `fs2` advisory lock on a sibling
//! `.lock` file and re-reads the document, so two helper processes sharing a
//! store never lose each other's writes. Nothing is cached between calls.
//!
//! ## Durability
//!
//! Writes go to a temp file which is fsynced and renamed over the document.
//! On Unix the temp file is created with mode 0600 before any secret is
//! written to it.

use crate::domain::errors::StoreError;
use crate::domain::slot::Slot;
use crate::ports::CredentialStore;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(default)]
    slots: BTreeMap<String, String>,
}

/// Credential store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl FileCredentialStore {
    /// Open (or prepare to create) the store document at `path`.
    ///
    /// Creates the parent directory. The document itself is created lazily
    /// on the first write.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut lock_name = path.as_os_str().to_owned();
        lock_name.push(".lock");

        debug!(path = %path.display(), "opened file credential store");
        Ok(Self {
            path,
            lock_path: PathBuf::from(lock_name),
        })
    }

    /// Location of the store document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // LOCKED DOCUMENT ACCESS
    // =========================================================================

    /// Run `op` against the current document while holding the lock.
    ///
    /// `op` returns whether the document changed; a changed document is
    /// written back before the lock is released.
    fn with_document<T>(
        &self,
        slot: Slot,
        op: impl FnOnce(&mut BTreeMap<String, String>) -> (T, bool),
    ) -> Result<T, StoreError> {
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&self.lock_path)
            .map_err(|e| StoreError::backend(slot, e))?;
        FileExt::lock_exclusive(&lock).map_err(|e| StoreError::backend(slot, e))?;

        let result = self.read_document(slot).and_then(|mut document| {
            let (value, changed) = op(&mut document.slots);
            if changed {
                self.write_document(slot, &document)?;
            }
            Ok(value)
        });

        // Closing the handle releases the lock too.
        if let Err(e) = FileExt::unlock(&lock) {
            debug!(error = %e, "failed to release credential store lock");
        }
        result
    }

    fn read_document(&self, slot: Slot) -> Result<StoreDocument, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(StoreDocument {
                    version: DOCUMENT_VERSION,
                    slots: BTreeMap::new(),
                })
            }
            Err(e) => return Err(StoreError::backend(slot, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(StoreDocument {
                version: DOCUMENT_VERSION,
                slots: BTreeMap::new(),
            });
        }

        let document: StoreDocument =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupted {
                reason: e.to_string(),
            })?;
        if document.version != DOCUMENT_VERSION {
            return Err(StoreError::Corrupted {
                reason: format!("unsupported document version {}", document.version),
            });
        }
        Ok(document)
    }

    fn write_document(&self, slot: Slot, document: &StoreDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(|e| StoreError::backend(slot, e))?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = create_private(&temp_path).map_err(|e| StoreError::backend(slot, e))?;
        file.write_all(&bytes)
            .map_err(|e| StoreError::backend(slot, e))?;
        file.sync_all().map_err(|e| StoreError::backend(slot, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::backend(slot, e))?;
        Ok(())
    }
}

#[cfg(unix)]
fn create_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> io::Result<File> {
    File::create(path)
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, slot: Slot) -> Result<Option<String>, StoreError> {
        self.with_document(slot, |slots| (slots.get(slot.storage_name()).cloned(), false))
    }

    fn set(&self, slot: Slot, value: &str) -> Result<(), StoreError> {
        self.with_document(slot, |slots| {
            slots.insert(slot.storage_name().to_string(), value.to_string());
            ((), true)
        })?;
        debug!(slot = %slot, "credential slot written");
        Ok(())
    }

    fn delete(&self, slot: Slot) -> Result<(), StoreError> {
        let removed = self.with_document(slot, |slots| {
            let removed = slots.remove(slot.storage_name()).is_some();
            (removed, removed)
        })?;
        if removed {
            debug!(slot = %slot, "credential slot cleared");
        }
        Ok(())
    }
}
