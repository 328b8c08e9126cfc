//! # Signatures
//!
//! RSASSA-PKCS1-v1.5 over the SHA-256 digest of a canonical payload.
//! Signing uses RSA blinding with the OS RNG.

use super::encoding::Signature;
use super::errors::IdentityError;
use super::payload::SigningPayload;
use rand::rngs::OsRng;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

/// SHA-256 of the rendered payload.
pub fn digest(payload: &SigningPayload<'_>) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(payload.render().as_bytes()));
    out
}

/// Sign a payload with the device private key.
pub fn sign(key: &RsaPrivateKey, payload: &SigningPayload<'_>) -> Result<Signature, IdentityError> {
    let hashed = digest(payload);
    key.sign_with_rng(&mut OsRng, Pkcs1v15Sign::new::<Sha256>(), &hashed)
        .map(Signature::from_bytes)
        .map_err(|e| IdentityError::SigningFailed {
            reason: e.to_string(),
        })
}

/// Check a signature over a payload. A mismatch is `false`, not an error.
pub fn verify(key: &RsaPublicKey, payload: &SigningPayload<'_>, signature: &Signature) -> bool {
    let hashed = digest(payload);
    key.verify(Pkcs1v15Sign::new::<Sha256>(), &hashed, signature.as_bytes())
        .is_ok()
}
