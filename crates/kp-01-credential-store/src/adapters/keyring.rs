//! OS secret manager backend (`os-keyring` feature).
//!
//! Service name is the namespace, user name is the slot's storage name.

use crate::domain::errors::StoreError;
use crate::domain::slot::Slot;
use crate::ports::CredentialStore;
use keyring::Entry;
use tracing::debug;

/// Credential store backed by the platform keychain.
#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    namespace: String,
}

impl KeyringCredentialStore {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn entry(&self, slot: Slot) -> Result<Entry, StoreError> {
        Entry::new(&self.namespace, slot.storage_name()).map_err(|e| StoreError::backend(slot, e))
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self, slot: Slot) -> Result<Option<String>, StoreError> {
        match self.entry(slot)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StoreError::backend(slot, e)),
        }
    }

    fn set(&self, slot: Slot, value: &str) -> Result<(), StoreError> {
        self.entry(slot)?
            .set_password(value)
            .map_err(|e| StoreError::backend(slot, e))?;
        debug!(slot = %slot, "credential slot written");
        Ok(())
    }

    fn delete(&self, slot: Slot) -> Result<(), StoreError> {
        match self.entry(slot)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StoreError::backend(slot, e)),
        }
    }
}
