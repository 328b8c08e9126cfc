//! # Keeper Errors
//!
//! Per-request failures of the protocol handlers. The `Display` output is
//! the caller-safe message placed in the response envelope: store and
//! identity errors only ever display their own safe text, and their raw
//! diagnostics stay reachable through `Debug` for logging.

use kp_01_credential_store::StoreError;
use kp_02_identity_engine::IdentityError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeeperError {
    /// A store operation failed while performing `context`.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// An identity operation failed while performing `context`.
    #[error("{context}: {source}")]
    Identity {
        context: &'static str,
        #[source]
        source: IdentityError,
    },

    /// The server's signature did not verify against the trust anchor.
    #[error("signature verification failed: signature does not match server public key")]
    SignatureRejected,

    /// Signup attempted on a device that already has identity and session.
    #[error("device already registered. this device has already been registered for signup")]
    AlreadyRegistered,

    /// An operation needing the device identity ran before signup.
    #[error("device not registered. please complete signup first")]
    NotRegistered,

    /// First-run trust anchor installation failed.
    #[error("failed to bootstrap server public key: {reason}")]
    TrustAnchor { reason: String },
}

impl KeeperError {
    /// Adapter for `map_err` on store results.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> KeeperError {
        move |source| KeeperError::Store { context, source }
    }

    /// Adapter for `map_err` on identity results.
    pub fn identity(context: &'static str) -> impl FnOnce(IdentityError) -> KeeperError {
        move |source| KeeperError::Identity { context, source }
    }

    /// Message suitable for the response envelope.
    pub fn safe_message(&self) -> String {
        self.to_string()
    }
}
