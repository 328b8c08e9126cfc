//! # Wire Artifacts
//!
//! Signatures and ciphertexts cross the process boundary as standard base64.

use super::errors::IdentityError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Raw RSA signature bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_base64(encoded: &str) -> Result<Self, IdentityError> {
        STANDARD
            .decode(encoded)
            .map(Self)
            .map_err(|_| IdentityError::InvalidEncoding { what: "signature" })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Raw RSA-OAEP ciphertext bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_base64(encoded: &str) -> Result<Self, IdentityError> {
        STANDARD
            .decode(encoded)
            .map(Self)
            .map_err(|_| IdentityError::InvalidEncoding { what: "ciphertext" })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
