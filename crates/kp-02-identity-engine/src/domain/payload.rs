//! # Canonical Signing Payloads
//!
//! Every signature Keeper produces or checks covers exactly one of these
//! strings. The rendering is part of the protocol: the remote service
//! rebuilds the same bytes to verify.

use std::borrow::Cow;

/// The exact string a signature is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningPayload<'a> {
    /// Signup: the alias as given.
    Alias(&'a str),
    /// Login: `alias:timestamp`, decimal Unix seconds, no other separators.
    AliasAt { alias: &'a str, timestamp: i64 },
    /// Server challenge, as given.
    ChallengeToken(&'a str),
    /// Base64 ciphertext text of a session code, as given.
    EncryptedSessionCode(&'a str),
}

impl<'a> SigningPayload<'a> {
    pub fn render(&self) -> Cow<'a, str> {
        match *self {
            SigningPayload::Alias(alias) => Cow::Borrowed(alias),
            SigningPayload::AliasAt { alias, timestamp } => {
                Cow::Owned(format!("{}:{}", alias, timestamp))
            }
            SigningPayload::ChallengeToken(token) => Cow::Borrowed(token),
            SigningPayload::EncryptedSessionCode(text) => Cow::Borrowed(text),
        }
    }
}
