//! # Inbound Ports (Driving Ports / API)
//!
//! The identity operations the protocol handlers depend on. Keys cross this
//! boundary in their persisted PEM form so callers never hold parsed key
//! material.

use crate::domain::encoding::{Ciphertext, Signature};
use crate::domain::errors::IdentityError;
use crate::domain::keys::KeyPair;
use crate::domain::payload::SigningPayload;
use zeroize::Zeroizing;

/// Primary Identity Engine API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait IdentityApi: Send + Sync {
    /// Generate a fresh device keypair.
    fn generate_identity(&self) -> Result<KeyPair, IdentityError>;

    /// Check that `public_pem` is an RSA public key.
    fn check_public_key(&self, public_pem: &str) -> Result<(), IdentityError>;

    /// Sign a canonical payload with a PKCS#8 PEM private key.
    fn sign(
        &self,
        private_pem: &str,
        payload: SigningPayload<'_>,
    ) -> Result<Signature, IdentityError>;

    /// Verify a signature with an SPKI PEM public key.
    ///
    /// `Ok(false)` on mismatch; `Err` only when the key cannot be parsed.
    fn verify(
        &self,
        public_pem: &str,
        payload: SigningPayload<'_>,
        signature: &Signature,
    ) -> Result<bool, IdentityError>;

    /// Encrypt to an SPKI PEM public key.
    fn encrypt(&self, public_pem: &str, plaintext: &[u8]) -> Result<Ciphertext, IdentityError>;

    /// Decrypt with a PKCS#8 PEM private key, requiring UTF-8 plaintext.
    fn decrypt_text(
        &self,
        private_pem: &str,
        ciphertext: &Ciphertext,
    ) -> Result<Zeroizing<String>, IdentityError>;
}
