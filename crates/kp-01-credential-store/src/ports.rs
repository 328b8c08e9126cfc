//! # Ports
//!
//! The driven port the protocol handlers use to reach the secret store.
//!
//! Production: `FileCredentialStore`, `KeyringCredentialStore`
//! Testing: `InMemoryCredentialStore`

use crate::domain::errors::StoreError;
use crate::domain::slot::Slot;

/// Keyed access to the named secret slots.
///
/// Implementations must make each call atomic for its slot. Calls are
/// synchronous; the store's own concurrency discipline is opaque to callers.
pub trait CredentialStore: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot is empty.
    fn get(&self, slot: Slot) -> Result<Option<String>, StoreError>;

    /// Write a slot, replacing any previous value.
    fn set(&self, slot: Slot, value: &str) -> Result<(), StoreError>;

    /// Clear a slot. Clearing an empty slot succeeds.
    fn delete(&self, slot: Slot) -> Result<(), StoreError>;

    /// Read a slot that must be populated.
    fn require(&self, slot: Slot) -> Result<String, StoreError> {
        self.get(slot)?.ok_or(StoreError::NotFound { slot })
    }

    /// Whether a slot is populated.
    fn contains(&self, slot: Slot) -> Result<bool, StoreError> {
        Ok(self.get(slot)?.is_some())
    }
}
