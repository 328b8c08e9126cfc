//! # Credential Store (KP-01)
//!
//! Keyed get/set/delete over the named secret slots Keeper persists.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): slot names and store errors
//! - **Ports Layer** (`ports.rs`): the `CredentialStore` trait the handlers depend on
//! - **Adapters** (`adapters/`): in-memory, file-backed and OS keyring backends
//!
//! ## Consistency
//!
//! Every operation is atomic for a single slot. There is no cross-slot
//! transaction: callers that write several slots must order their writes
//! and tolerate a partially applied sequence.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::file::FileCredentialStore;
#[cfg(feature = "os-keyring")]
pub use adapters::keyring::KeyringCredentialStore;
pub use adapters::memory::InMemoryCredentialStore;
pub use domain::errors::StoreError;
pub use domain::slot::{Slot, DEFAULT_NAMESPACE};
pub use ports::CredentialStore;
