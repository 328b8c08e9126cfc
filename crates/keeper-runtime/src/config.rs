//! # Runtime Configuration
//!
//! Every option can also be set through the environment. Browsers launch
//! the host with the caller origin (and on Windows `--parent-window=<n>`)
//! as trailing arguments; those are collected and only logged.

use clap::{Parser, ValueEnum};
use kp_01_credential_store::DEFAULT_NAMESPACE;
use std::path::PathBuf;

/// Credential store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Volatile, lost on exit.
    Memory,
    /// JSON document on disk.
    File,
    /// OS secret manager (needs the `os-keyring` feature).
    Keyring,
}

/// Keeper native-messaging host
#[derive(Parser, Debug, Clone)]
#[command(name = "keeper-host", version)]
#[command(about = "Native-messaging host that custodies this device's identity")]
pub struct RuntimeConfig {
    /// Credential store backend
    #[arg(long, env = "KEEPER_STORE", value_enum, default_value = "file")]
    pub store: StoreKind,

    /// Location of the file store document
    #[arg(long, env = "KEEPER_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    /// Namespace (keyring service name) the slots live under
    #[arg(long, env = "KEEPER_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Arguments supplied by the browser (caller origin, parent window)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub caller: Vec<String>,
}

impl RuntimeConfig {
    /// File store location, defaulting to `<local data dir>/keeper/credentials.json`.
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(default_store_path)
    }
}

pub fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keeper")
        .join("credentials.json")
}
