//! Credential store selection.

use crate::config::{RuntimeConfig, StoreKind};
use anyhow::{Context, Result};
use kp_01_credential_store::{CredentialStore, FileCredentialStore, InMemoryCredentialStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Open the backend selected by `config`.
pub fn open_store(config: &RuntimeConfig) -> Result<Arc<dyn CredentialStore>> {
    match config.store {
        StoreKind::Memory => {
            warn!("using volatile in-memory credential store");
            Ok(Arc::new(InMemoryCredentialStore::new()))
        }
        StoreKind::File => {
            let path = config.resolved_store_path();
            let store = FileCredentialStore::open(&path)
                .with_context(|| format!("failed to open credential file {}", path.display()))?;
            info!(path = %path.display(), "using file credential store");
            Ok(Arc::new(store))
        }
        StoreKind::Keyring => open_keyring(&config.namespace),
    }
}

#[cfg(feature = "os-keyring")]
fn open_keyring(namespace: &str) -> Result<Arc<dyn CredentialStore>> {
    let store = kp_01_credential_store::KeyringCredentialStore::new(namespace);
    info!(namespace = store.namespace(), "using OS keyring credential store");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "os-keyring"))]
fn open_keyring(_namespace: &str) -> Result<Arc<dyn CredentialStore>> {
    anyhow::bail!("keyring store requested but this build lacks the os-keyring feature")
}
