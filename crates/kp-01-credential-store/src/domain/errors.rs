//! # Store Errors
//!
//! `Display` output is shown to callers, so backend diagnostics are kept in
//! `reason` fields and only ever logged.

use crate::domain::slot::Slot;
use thiserror::Error;

/// Errors from credential store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The slot holds no value.
    #[error("no {slot} stored on this device")]
    NotFound { slot: Slot },

    /// The backend failed to complete the operation.
    #[error("credential store unavailable while accessing {slot}")]
    Backend { slot: Slot, reason: String },

    /// Persisted data could not be decoded.
    #[error("credential store data is corrupted")]
    Corrupted { reason: String },
}

impl StoreError {
    /// Build a backend error from any displayable cause.
    pub fn backend(slot: Slot, cause: impl std::fmt::Display) -> Self {
        StoreError::Backend {
            slot,
            reason: cause.to_string(),
        }
    }
}
