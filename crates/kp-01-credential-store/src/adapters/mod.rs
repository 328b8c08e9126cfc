//! # Adapters
//!
//! Concrete `CredentialStore` backends.

pub mod file;
#[cfg(feature = "os-keyring")]
pub mod keyring;
pub mod memory;
