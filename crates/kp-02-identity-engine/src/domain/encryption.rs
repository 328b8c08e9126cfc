//! # Session Code Encryption
//!
//! RSA-OAEP with SHA-256 and an empty label. The remote service encrypts
//! session codes to the device public key; Keeper decrypts them.

use super::encoding::Ciphertext;
use super::errors::IdentityError;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

const SHA256_LEN: usize = 32;

/// Largest plaintext OAEP-SHA256 can carry under `key`.
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(2 * SHA256_LEN + 2)
}

pub fn encrypt(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Ciphertext, IdentityError> {
    let max = max_plaintext_len(key);
    if plaintext.len() > max {
        return Err(IdentityError::PlaintextTooLong {
            len: plaintext.len(),
            max,
        });
    }
    key.encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
        .map(Ciphertext::from_bytes)
        .map_err(|e| IdentityError::EncryptionFailed {
            reason: e.to_string(),
        })
}

/// Decrypt to raw bytes.
pub fn decrypt(
    key: &RsaPrivateKey,
    ciphertext: &Ciphertext,
) -> Result<Zeroizing<Vec<u8>>, IdentityError> {
    key.decrypt(Oaep::new::<Sha256>(), ciphertext.as_bytes())
        .map(Zeroizing::new)
        .map_err(|_| IdentityError::DecryptionFailed)
}

/// Decrypt to UTF-8 text.
pub fn decrypt_text(
    key: &RsaPrivateKey,
    ciphertext: &Ciphertext,
) -> Result<Zeroizing<String>, IdentityError> {
    let bytes = decrypt(key, ciphertext)?;
    let text = std::str::from_utf8(&bytes).map_err(|_| IdentityError::InvalidPlaintext)?;
    Ok(Zeroizing::new(text.to_owned()))
}
