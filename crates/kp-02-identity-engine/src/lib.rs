//! # Identity Engine (KP-02)
//!
//! Cryptographic core of Keeper: the device keypair and every signature,
//! verification, encryption and decryption performed on its behalf.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure RSA and encoding logic, no I/O
//! - **Ports Layer** (`ports/`): the `IdentityApi` used by the protocol handlers
//! - **Service Layer** (`service.rs`): `IdentityEngine`, backed by the OS RNG
//!
//! ## Algorithms
//!
//! | Operation | Scheme |
//! |-----------|--------|
//! | Keys | RSA-2048, private as PKCS#8 PEM, public as SPKI PEM (LF) |
//! | Sign / verify | RSASSA-PKCS1-v1.5 over SHA-256, blinded signing |
//! | Encrypt / decrypt | RSA-OAEP, SHA-256, empty label |
//! | Wire artifacts | standard base64 |
//!
//! ## Security Notes
//!
//! - Private key PEM text only lives in `Zeroizing` buffers
//! - Signatures are always over the SHA-256 digest of a [`SigningPayload`]
//! - Decoding failures are reported separately from cryptographic failures

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::encoding::{Ciphertext, Signature};
pub use domain::errors::IdentityError;
pub use domain::keys::{KeyPair, KEY_BITS};
pub use domain::payload::SigningPayload;
pub use ports::inbound::IdentityApi;
pub use service::IdentityEngine;

#[cfg(test)]
pub(crate) mod test_utils;
