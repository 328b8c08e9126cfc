//! # Inbound Ports (Driving Ports / API)
//!
//! One method per protocol action. Request payloads arrive decoded and
//! validated; responses are the typed data placed in the envelope.

use crate::domain::errors::KeeperError;
use crate::domain::state::ProvisioningState;
use shared_types::{
    ChallengeRequest, DeviceKeyData, PingData, PublicKeyData, SaveDeviceKeyRequest,
    SaveSessionCodeRequest, SessionCodeData, SignAliasData, SignAliasRequest,
    SignAliasWithTimestampRequest, SignatureData, TimestampedSignatureData,
};

/// Primary Keeper API.
pub trait KeeperApi: Send + Sync {
    // =========================================================================
    // Liveness
    // =========================================================================

    /// `ping`: static build identity.
    fn ping(&self) -> PingData;

    // =========================================================================
    // Signup / Login
    // =========================================================================

    /// `signalias`: rotate the identity and sign the alias.
    ///
    /// # Errors
    /// - `AlreadyRegistered`: identity and session are both present
    fn sign_alias(&self, request: &SignAliasRequest) -> Result<SignAliasData, KeeperError>;

    /// `savesessioncode`: verify the server's signature over the ciphertext
    /// text, decrypt it with the device key and persist the session code.
    ///
    /// # Errors
    /// - `SignatureRejected`: server signature does not verify
    /// - `NotRegistered`: no device identity
    fn save_session_code(
        &self,
        request: &SaveSessionCodeRequest,
    ) -> Result<SessionCodeData, KeeperError>;

    /// `signaliaswithtimestamp`: sign `alias:now` with the existing identity.
    ///
    /// # Errors
    /// - `NotRegistered`: no device identity
    fn sign_alias_with_timestamp(
        &self,
        request: &SignAliasWithTimestampRequest,
    ) -> Result<TimestampedSignatureData, KeeperError>;

    // =========================================================================
    // Device linking
    // =========================================================================

    /// `signchallengetoken`: counter-sign a server-signed challenge.
    fn sign_challenge_token(&self, request: &ChallengeRequest)
        -> Result<SignatureData, KeeperError>;

    /// `generatekeypair`: rotate the identity for a server-signed challenge.
    fn generate_keypair(&self, request: &ChallengeRequest) -> Result<PublicKeyData, KeeperError>;

    // =========================================================================
    // Slot accessors
    // =========================================================================

    fn get_device_key(&self) -> Result<DeviceKeyData, KeeperError>;

    fn save_device_key(&self, request: &SaveDeviceKeyRequest) -> Result<(), KeeperError>;

    fn delete_device_key(&self) -> Result<(), KeeperError>;

    fn get_session_code(&self) -> Result<SessionCodeData, KeeperError>;

    fn get_public_key(&self) -> Result<PublicKeyData, KeeperError>;

    fn get_server_public_key(&self) -> Result<PublicKeyData, KeeperError>;

    /// Which implicit state the device is in.
    fn provisioning_state(&self) -> Result<ProvisioningState, KeeperError>;
}
