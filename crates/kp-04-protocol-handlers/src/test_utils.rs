//! Test fixtures shared with downstream test suites (`test-utils` feature).
//!
//! The "server" keypair plays the remote service: its public half is the
//! trust anchor installed by [`bootstrapped_service`], and [`server_sign`]
//! produces the signatures the service would attach to challenges and
//! session codes.

use crate::bootstrap::ensure_trust_anchor;
use crate::domain::build_info::BuildInfo;
use crate::ports::outbound::FixedClock;
use crate::service::KeeperService;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use kp_01_credential_store::InMemoryCredentialStore;
use kp_02_identity_engine::{IdentityApi, IdentityEngine, KeyPair, SigningPayload};
use std::sync::{Arc, OnceLock};

/// Login timestamp reported by the fixed test clock.
pub const TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Keypair standing in for the remote service.
pub fn server_keys() -> &'static KeyPair {
    static KEYS: OnceLock<KeyPair> = OnceLock::new();
    KEYS.get_or_init(|| {
        IdentityEngine::new()
            .generate_identity()
            .expect("server keypair")
    })
}

/// Trust anchor in the embedded form (base64 of the PEM text).
pub fn test_anchor() -> String {
    STANDARD.encode(server_keys().public_pem.as_bytes())
}

/// Base64 server signature over a literal payload.
pub fn server_sign(payload: &str) -> String {
    IdentityEngine::new()
        .sign(
            &server_keys().private_pem,
            SigningPayload::ChallengeToken(payload),
        )
        .expect("server signature")
        .to_base64()
}

/// Base64 OAEP ciphertext of `plaintext` for `public_pem`.
pub fn encrypt_for(public_pem: &str, plaintext: &str) -> String {
    IdentityEngine::new()
        .encrypt(public_pem, plaintext.as_bytes())
        .expect("encryption")
        .to_base64()
}

pub fn test_build_info() -> BuildInfo {
    BuildInfo::new(
        "0.1.0",
        "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08",
        "/opt/keeper/keeper-host",
    )
}

/// Service over a fresh in-memory store with the test anchor installed and
/// the clock frozen at [`TEST_TIMESTAMP`].
pub fn bootstrapped_service() -> (KeeperService, Arc<InMemoryCredentialStore>) {
    let store = Arc::new(InMemoryCredentialStore::new());
    ensure_trust_anchor(store.as_ref(), &IdentityEngine::new(), &test_anchor())
        .expect("test anchor");
    let service = KeeperService::new(store.clone(), test_build_info())
        .with_clock(Arc::new(FixedClock(TEST_TIMESTAMP)));
    (service, store)
}
