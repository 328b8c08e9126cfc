//! # Identity Engine Service
//!
//! Implements `IdentityApi` by parsing the PEM it is handed and delegating
//! to the domain layer.

use crate::domain::encoding::{Ciphertext, Signature};
use crate::domain::errors::IdentityError;
use crate::domain::keys::{self, KeyPair, KEY_BITS};
use crate::domain::payload::SigningPayload;
use crate::domain::{encryption, signing};
use crate::ports::inbound::IdentityApi;
use tracing::debug;
use zeroize::Zeroizing;

/// RSA identity engine.
#[derive(Debug, Clone)]
pub struct IdentityEngine {
    key_bits: usize,
}

impl Default for IdentityEngine {
    fn default() -> Self {
        Self { key_bits: KEY_BITS }
    }
}

impl IdentityEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityApi for IdentityEngine {
    fn generate_identity(&self) -> Result<KeyPair, IdentityError> {
        let pair = keys::generate_keypair(self.key_bits)?;
        debug!(bits = self.key_bits, "generated device keypair");
        Ok(pair)
    }

    fn check_public_key(&self, public_pem: &str) -> Result<(), IdentityError> {
        keys::parse_public_key(public_pem).map(|_| ())
    }

    fn sign(
        &self,
        private_pem: &str,
        payload: SigningPayload<'_>,
    ) -> Result<Signature, IdentityError> {
        let key = keys::parse_private_key(private_pem)?;
        signing::sign(&key, &payload)
    }

    fn verify(
        &self,
        public_pem: &str,
        payload: SigningPayload<'_>,
        signature: &Signature,
    ) -> Result<bool, IdentityError> {
        let key = keys::parse_public_key(public_pem)?;
        Ok(signing::verify(&key, &payload, signature))
    }

    fn encrypt(&self, public_pem: &str, plaintext: &[u8]) -> Result<Ciphertext, IdentityError> {
        let key = keys::parse_public_key(public_pem)?;
        encryption::encrypt(&key, plaintext)
    }

    fn decrypt_text(
        &self,
        private_pem: &str,
        ciphertext: &Ciphertext,
    ) -> Result<Zeroizing<String>, IdentityError> {
        let key = keys::parse_private_key(private_pem)?;
        encryption::decrypt_text(&key, ciphertext)
    }
}
