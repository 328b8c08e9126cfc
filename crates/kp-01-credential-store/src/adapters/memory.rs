//! In-memory credential store.

use crate::domain::errors::StoreError;
use crate::domain::slot::Slot;
use crate::ports::CredentialStore;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Volatile store backed by a `HashMap`.
///
/// Used by tests and by `--store memory` for throwaway sessions.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    slots: Mutex<HashMap<Slot, String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, slot: Slot) -> Result<Option<String>, StoreError> {
        Ok(self.slots.lock().get(&slot).cloned())
    }

    fn set(&self, slot: Slot, value: &str) -> Result<(), StoreError> {
        self.slots.lock().insert(slot, value.to_string());
        Ok(())
    }

    fn delete(&self, slot: Slot) -> Result<(), StoreError> {
        self.slots.lock().remove(&slot);
        Ok(())
    }
}
