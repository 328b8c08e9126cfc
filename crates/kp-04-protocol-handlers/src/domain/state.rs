//! # Provisioning State
//!
//! Derived from slot presence, never persisted on its own.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningState {
    /// No device identity.
    Unprovisioned,
    /// Identity present, no session credential.
    Provisioned,
    /// Identity and session credential present.
    Authenticated,
}

impl ProvisioningState {
    pub fn from_slots(has_identity: bool, has_session: bool) -> Self {
        match (has_identity, has_session) {
            (false, _) => ProvisioningState::Unprovisioned,
            (true, false) => ProvisioningState::Provisioned,
            (true, true) => ProvisioningState::Authenticated,
        }
    }
}

impl fmt::Display for ProvisioningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisioningState::Unprovisioned => f.write_str("unprovisioned"),
            ProvisioningState::Provisioned => f.write_str("provisioned"),
            ProvisioningState::Authenticated => f.write_str("authenticated"),
        }
    }
}
