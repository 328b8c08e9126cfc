//! # Request Payloads
//!
//! Typed payload shapes, one per action that carries data.
//!
//! Every field defaults to empty so that an absent payload decodes to the
//! shape's default and is then rejected by [`Validate`] with a field-level
//! message rather than a parser diagnostic.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required-field checks run after a payload has been decoded.
///
/// Shapes without required fields use the default (always passes).
pub trait Validate {
    /// Check required fields, reporting the first failure.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

// =============================================================================
// PAYLOAD-LESS ACTIONS
// =============================================================================

/// Payload for actions that take no input.
///
/// Any JSON object is accepted and ignored; a non-object payload is still a
/// decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRequest {}

impl Validate for EmptyRequest {}

// =============================================================================
// SIGNUP / LOGIN
// =============================================================================

/// `signalias`: provision an identity and sign the alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignAliasRequest {
    pub alias: String,
}

impl Validate for SignAliasRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("alias", &self.alias)
    }
}

/// `signaliaswithtimestamp`: sign `alias:timestamp` with the existing identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignAliasWithTimestampRequest {
    pub alias: String,
}

impl Validate for SignAliasWithTimestampRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("alias", &self.alias)
    }
}

/// `savesessioncode`: server-encrypted session code plus the server's
/// signature over the ciphertext text.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveSessionCodeRequest {
    pub encrypted_session_code: String,
    pub signature: String,
}

impl Validate for SaveSessionCodeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("encrypted_session_code", &self.encrypted_session_code)?;
        require("signature", &self.signature)
    }
}

impl fmt::Debug for SaveSessionCodeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveSessionCodeRequest")
            .field("encrypted_session_code", &"[SESSION_CODE_MASKED]")
            .field("signature", &"[SIGNATURE_MASKED]")
            .finish()
    }
}

// =============================================================================
// CHALLENGE FLOWS
// =============================================================================

/// A challenge token together with the server's signature over it.
///
/// Shared by `signchallengetoken` and `generatekeypair`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeRequest {
    pub challenge_token: String,
    pub signature: String,
}

impl Validate for ChallengeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("challenge_token", &self.challenge_token)?;
        require("signature", &self.signature)
    }
}

/// `signchallengetoken` payload.
pub type SignChallengeTokenRequest = ChallengeRequest;

/// `generatekeypair` payload.
pub type GenerateKeypairRequest = ChallengeRequest;

// =============================================================================
// DEVICE SECRET
// =============================================================================

/// `savedevicekey`: opaque device secret stored verbatim.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveDeviceKeyRequest {
    pub key: String,
}

impl Validate for SaveDeviceKeyRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("key", &self.key)
    }
}

impl fmt::Debug for SaveDeviceKeyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveDeviceKeyRequest")
            .field("key", &"[KEY_MASKED]")
            .finish()
    }
}
