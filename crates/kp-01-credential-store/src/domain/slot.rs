//! # Slots
//!
//! The fixed set of named entries Keeper keeps in the secret store.

use std::fmt;

/// Namespace (service name) all slots live under unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "com.dragpass.keeper";

/// A named persistent entry in the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Remote service public key, written once at bootstrap.
    ServerTrustAnchor,
    /// Device private key (PKCS#8 PEM).
    IdentityPrivate,
    /// Device public key (SPKI PEM).
    IdentityPublic,
    /// Opaque caller-supplied device secret.
    DeviceSecret,
    /// Decrypted session credential.
    SessionCredential,
}

impl Slot {
    /// Every slot.
    pub const ALL: [Slot; 5] = [
        Slot::ServerTrustAnchor,
        Slot::IdentityPrivate,
        Slot::IdentityPublic,
        Slot::DeviceSecret,
        Slot::SessionCredential,
    ];

    /// Stable key used by the storage backends.
    ///
    /// Changing one of these orphans existing installations' data.
    pub fn storage_name(&self) -> &'static str {
        match self {
            Slot::ServerTrustAnchor => "server_public_key",
            Slot::IdentityPrivate => "keeper_private_key",
            Slot::IdentityPublic => "keeper_public_key",
            Slot::DeviceSecret => "device_key",
            Slot::SessionCredential => "session_code",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Slot::ServerTrustAnchor => "server public key",
            Slot::IdentityPrivate => "device private key",
            Slot::IdentityPublic => "device public key",
            Slot::DeviceSecret => "device key",
            Slot::SessionCredential => "session code",
        };
        f.write_str(label)
    }
}
