//! # Actions
//!
//! The closed set of actions a caller may request.

use std::fmt;
use std::str::FromStr;

/// Every action understood by the helper.
///
/// Parsed from the `action` tag of a request envelope. The tag is matched
/// exactly (lowercase, no aliases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Health check returning the build identity.
    Ping,
    /// Device linking: rotate the identity after a server-signed challenge.
    GenerateKeypair,
    /// Read the opaque device secret.
    GetDeviceKey,
    /// Store the opaque device secret.
    SaveDeviceKey,
    /// Remove the opaque device secret.
    DeleteDeviceKey,
    /// Read the session credential.
    GetSessionCode,
    /// Decrypt and store a server-issued session credential.
    SaveSessionCode,
    /// Read the device public key.
    GetPublicKey,
    /// Read the server trust anchor.
    GetServerPublicKey,
    /// Signup: provision a fresh identity and sign the alias.
    SignAlias,
    /// Login: sign `alias:timestamp` with the existing identity.
    SignAliasWithTimestamp,
    /// Counter-sign a server-signed challenge token.
    SignChallengeToken,
}

impl Action {
    /// All actions, in wire-documentation order.
    pub const ALL: [Action; 12] = [
        Action::Ping,
        Action::GenerateKeypair,
        Action::GetDeviceKey,
        Action::SaveDeviceKey,
        Action::DeleteDeviceKey,
        Action::GetSessionCode,
        Action::SaveSessionCode,
        Action::GetPublicKey,
        Action::GetServerPublicKey,
        Action::SignAlias,
        Action::SignAliasWithTimestamp,
        Action::SignChallengeToken,
    ];

    /// The wire tag for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Ping => "ping",
            Action::GenerateKeypair => "generatekeypair",
            Action::GetDeviceKey => "getdevicekey",
            Action::SaveDeviceKey => "savedevicekey",
            Action::DeleteDeviceKey => "deletedevicekey",
            Action::GetSessionCode => "getsessioncode",
            Action::SaveSessionCode => "savesessioncode",
            Action::GetPublicKey => "getpublickey",
            Action::GetServerPublicKey => "getserverpubkey",
            Action::SignAlias => "signalias",
            Action::SignAliasWithTimestamp => "signaliaswithtimestamp",
            Action::SignChallengeToken => "signchallengetoken",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag does not name any [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == tag)
            .ok_or_else(|| UnknownAction(tag.to_string()))
    }
}
