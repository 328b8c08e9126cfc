//! # Keeper Service
//!
//! Application service implementing `KeeperApi` over a credential store and
//! an identity engine.
//!
//! ## Identity Rotation
//!
//! Signup and device linking share one rotation routine. After a keypair is
//! generated the store writes run in this order:
//!
//! 1. delete the session credential (missing is ok)
//! 2. write the private key
//! 3. write the public key
//!
//! A failure aborts the sequence and earlier writes stay in place. An
//! interrupted rotation never leaves a session credential next to a new key.

use crate::domain::build_info::BuildInfo;
use crate::domain::errors::KeeperError;
use crate::domain::state::ProvisioningState;
use crate::ports::inbound::KeeperApi;
use crate::ports::outbound::{SystemClock, TimeSource};
use kp_01_credential_store::{CredentialStore, Slot};
use kp_02_identity_engine::{
    Ciphertext, IdentityApi, IdentityEngine, KeyPair, Signature, SigningPayload,
};
use shared_types::{
    ChallengeRequest, DeviceKeyData, PingData, PublicKeyData, SaveDeviceKeyRequest,
    SaveSessionCodeRequest, SessionCodeData, SignAliasData, SignAliasRequest,
    SignAliasWithTimestampRequest, SignatureData, TimestampedSignatureData,
};
use std::sync::Arc;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Keeper protocol service.
pub struct KeeperService {
    store: Arc<dyn CredentialStore>,
    identity: Arc<dyn IdentityApi>,
    clock: Arc<dyn TimeSource>,
    build: BuildInfo,
}

impl KeeperService {
    /// Service with the RSA identity engine and the system clock.
    pub fn new(store: Arc<dyn CredentialStore>, build: BuildInfo) -> Self {
        Self {
            store,
            identity: Arc::new(IdentityEngine::new()),
            clock: Arc::new(SystemClock),
            build,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    // =========================================================================
    // INTERNAL HELPERS
    // =========================================================================

    /// Generate a keypair and replace the stored identity with it.
    fn rotate_identity(&self) -> Result<KeyPair, KeeperError> {
        let pair = self
            .identity
            .generate_identity()
            .map_err(KeeperError::identity("keypair generation failed"))?;

        self.store
            .delete(Slot::SessionCredential)
            .map_err(KeeperError::store("session code delete failed"))?;
        self.store
            .set(Slot::IdentityPrivate, &pair.private_pem)
            .map_err(KeeperError::store("private key save failed"))?;
        self.store
            .set(Slot::IdentityPublic, &pair.public_pem)
            .map_err(KeeperError::store("public key save failed"))?;

        info!("device identity rotated");
        Ok(pair)
    }

    /// Stored private key, or `NotRegistered`.
    fn device_private_key(&self) -> Result<Zeroizing<String>, KeeperError> {
        self.store
            .get(Slot::IdentityPrivate)
            .map_err(KeeperError::store("failed to get private key"))?
            .map(Zeroizing::new)
            .ok_or(KeeperError::NotRegistered)
    }

    /// Check a server signature over `payload` against the stored anchor.
    fn verify_server_signature(
        &self,
        payload: SigningPayload<'_>,
        signature_b64: &str,
    ) -> Result<(), KeeperError> {
        let anchor = self
            .store
            .require(Slot::ServerTrustAnchor)
            .map_err(KeeperError::store("failed to get server public key"))?;
        let signature = Signature::from_base64(signature_b64)
            .map_err(KeeperError::identity("failed to decode signature"))?;

        let valid = self
            .identity
            .verify(&anchor, payload, &signature)
            .map_err(KeeperError::identity("failed to parse server public key"))?;
        if !valid {
            return Err(KeeperError::SignatureRejected);
        }
        debug!("server signature verified");
        Ok(())
    }

    fn read_slot(&self, slot: Slot, context: &'static str) -> Result<String, KeeperError> {
        self.store.require(slot).map_err(KeeperError::store(context))
    }
}

impl KeeperApi for KeeperService {
    fn ping(&self) -> PingData {
        PingData::from(&self.build)
    }

    fn sign_alias(&self, request: &SignAliasRequest) -> Result<SignAliasData, KeeperError> {
        if self.provisioning_state()? == ProvisioningState::Authenticated {
            return Err(KeeperError::AlreadyRegistered);
        }

        let pair = self.rotate_identity()?;
        let signature = self
            .identity
            .sign(&pair.private_pem, SigningPayload::Alias(&request.alias))
            .map_err(KeeperError::identity("failed to sign alias"))?;

        info!("signup alias signed");
        Ok(SignAliasData {
            signature: signature.to_base64(),
            public_key: pair.public_pem,
        })
    }

    fn save_session_code(
        &self,
        request: &SaveSessionCodeRequest,
    ) -> Result<SessionCodeData, KeeperError> {
        self.verify_server_signature(
            SigningPayload::EncryptedSessionCode(&request.encrypted_session_code),
            &request.signature,
        )?;

        let private_pem = self.device_private_key()?;
        let ciphertext = Ciphertext::from_base64(&request.encrypted_session_code)
            .map_err(KeeperError::identity("failed to decode encrypted session code"))?;
        let session_code = self
            .identity
            .decrypt_text(&private_pem, &ciphertext)
            .map_err(KeeperError::identity("failed to decrypt session code"))?;

        self.store
            .set(Slot::SessionCredential, &session_code)
            .map_err(KeeperError::store("session code save failed"))?;

        info!("session code saved");
        Ok(SessionCodeData {
            session_code: session_code.as_str().to_owned(),
        })
    }

    fn sign_alias_with_timestamp(
        &self,
        request: &SignAliasWithTimestampRequest,
    ) -> Result<TimestampedSignatureData, KeeperError> {
        let private_pem = self.device_private_key()?;
        let timestamp = self.clock.now_unix();
        let signature = self
            .identity
            .sign(
                &private_pem,
                SigningPayload::AliasAt {
                    alias: &request.alias,
                    timestamp,
                },
            )
            .map_err(KeeperError::identity("failed to sign alias with timestamp"))?;

        info!(timestamp, "login alias signed");
        Ok(TimestampedSignatureData {
            signature: signature.to_base64(),
            timestamp,
        })
    }

    fn sign_challenge_token(
        &self,
        request: &ChallengeRequest,
    ) -> Result<SignatureData, KeeperError> {
        let payload = SigningPayload::ChallengeToken(&request.challenge_token);
        self.verify_server_signature(payload, &request.signature)?;

        let private_pem = self.device_private_key()?;
        let signature = self
            .identity
            .sign(&private_pem, payload)
            .map_err(KeeperError::identity("failed to sign challenge token"))?;

        info!("challenge token counter-signed");
        Ok(SignatureData {
            signature: signature.to_base64(),
        })
    }

    fn generate_keypair(&self, request: &ChallengeRequest) -> Result<PublicKeyData, KeeperError> {
        self.verify_server_signature(
            SigningPayload::ChallengeToken(&request.challenge_token),
            &request.signature,
        )?;

        let pair = self.rotate_identity()?;
        Ok(PublicKeyData {
            public_key: pair.public_pem,
        })
    }

    fn get_device_key(&self) -> Result<DeviceKeyData, KeeperError> {
        let key = self.read_slot(Slot::DeviceSecret, "key retrieval failed")?;
        Ok(DeviceKeyData { key })
    }

    fn save_device_key(&self, request: &SaveDeviceKeyRequest) -> Result<(), KeeperError> {
        self.store
            .set(Slot::DeviceSecret, &request.key)
            .map_err(KeeperError::store("key save failed"))
    }

    fn delete_device_key(&self) -> Result<(), KeeperError> {
        self.store
            .delete(Slot::DeviceSecret)
            .map_err(KeeperError::store("key delete failed"))
    }

    fn get_session_code(&self) -> Result<SessionCodeData, KeeperError> {
        let session_code =
            self.read_slot(Slot::SessionCredential, "session code retrieval failed")?;
        Ok(SessionCodeData { session_code })
    }

    fn get_public_key(&self) -> Result<PublicKeyData, KeeperError> {
        let public_key = self.read_slot(Slot::IdentityPublic, "public key retrieval failed")?;
        Ok(PublicKeyData { public_key })
    }

    fn get_server_public_key(&self) -> Result<PublicKeyData, KeeperError> {
        let public_key = self.read_slot(
            Slot::ServerTrustAnchor,
            "server public key retrieval failed",
        )?;
        Ok(PublicKeyData { public_key })
    }

    fn provisioning_state(&self) -> Result<ProvisioningState, KeeperError> {
        let has_identity = self
            .store
            .contains(Slot::IdentityPrivate)
            .map_err(KeeperError::store("failed to get private key"))?;
        let has_session = self
            .store
            .contains(Slot::SessionCredential)
            .map_err(KeeperError::store("session code retrieval failed"))?;
        Ok(ProvisioningState::from_slots(has_identity, has_session))
    }
}
