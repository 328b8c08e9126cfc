//! # Identity Errors
//!
//! `Display` strings are safe to return to the caller. Library diagnostics
//! are carried in `reason` fields for logging only.

use thiserror::Error;

/// Errors from identity engine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The RNG or the prime search failed.
    #[error("failed to generate keypair")]
    KeyGeneration { reason: String },

    /// PEM or DER structure could not be decoded.
    #[error("key is not a valid PEM-encoded key")]
    MalformedKey { reason: String },

    /// Well-formed key of an algorithm other than RSA.
    #[error("key is not an RSA key")]
    UnsupportedKeyType,

    /// A base64 artifact (signature or ciphertext) did not decode.
    #[error("invalid {what} encoding")]
    InvalidEncoding { what: &'static str },

    #[error("failed to sign payload")]
    SigningFailed { reason: String },

    #[error("failed to encrypt payload")]
    EncryptionFailed { reason: String },

    /// Plaintext exceeds what OAEP can carry for this key size.
    #[error("plaintext is {len} bytes, at most {max} can be encrypted")]
    PlaintextTooLong { len: usize, max: usize },

    /// Wrong key or tampered ciphertext.
    #[error("failed to decrypt ciphertext")]
    DecryptionFailed,

    /// Decrypted bytes are not valid UTF-8 text.
    #[error("decrypted value is not valid text")]
    InvalidPlaintext,
}
