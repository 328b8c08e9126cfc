//! In-process host used by every scenario.
//!
//! Test support code: panics on fixture failures.

use keeper_runtime::{build_dispatcher, serve};
use kp_01_credential_store::{CredentialStore, InMemoryCredentialStore, Slot};
use kp_02_identity_engine::{IdentityApi, IdentityEngine, KeyPair, Signature, SigningPayload};
use kp_03_message_transport::{encode_frame, split_frames, Messenger, TransportError};
use kp_04_protocol_handlers::test_utils::{test_anchor, test_build_info};
use kp_04_protocol_handlers::KeeperService;
use kp_05_request_dispatcher::Dispatcher;
use serde_json::Value;
use std::io::Cursor;
use std::sync::{Arc, OnceLock};

/// Outcome of feeding raw bytes to the serve loop.
pub struct Transcript {
    pub result: Result<(), TransportError>,
    pub responses: Vec<Value>,
    /// Bytes of input the loop consumed.
    pub consumed: u64,
}

/// Host wired exactly like the binary, over a caller-chosen store.
pub struct Host {
    dispatcher: Dispatcher<KeeperService>,
    store: Arc<dyn CredentialStore>,
}

impl Host {
    /// Host over a fresh in-memory store with the test trust anchor.
    pub fn in_memory() -> Self {
        Self::over(Arc::new(InMemoryCredentialStore::new()))
    }

    pub fn over(store: Arc<dyn CredentialStore>) -> Self {
        Self::with_anchor(store, &test_anchor())
    }

    pub fn with_anchor(store: Arc<dyn CredentialStore>, encoded_anchor: &str) -> Self {
        let dispatcher = build_dispatcher(store.clone(), test_build_info(), encoded_anchor)
            .expect("host bootstrap");
        Self { dispatcher, store }
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Send one request and return its response.
    pub async fn send(&self, request: Value) -> Value {
        let mut responses = self.send_all(&[request]).await;
        assert_eq!(responses.len(), 1, "expected exactly one response");
        responses.remove(0)
    }

    /// Send requests in one session; the loop must end cleanly.
    pub async fn send_all(&self, requests: &[Value]) -> Vec<Value> {
        let input = requests.iter().flat_map(frame).collect();
        let transcript = self.send_raw(input).await;
        if let Err(err) = transcript.result {
            panic!("transport failed: {}", err);
        }
        transcript.responses
    }

    /// Feed raw bytes to the serve loop.
    pub async fn send_raw(&self, input: Vec<u8>) -> Transcript {
        let mut messenger = Messenger::new(Cursor::new(input), Vec::new());
        let result = serve(&mut messenger, &self.dispatcher).await;
        let (reader, output) = messenger.into_inner();
        let responses = split_frames(&output)
            .expect("response framing")
            .iter()
            .map(|body| serde_json::from_slice(body).expect("response JSON"))
            .collect();
        Transcript {
            result,
            responses,
            consumed: reader.position(),
        }
    }

    /// Raw contents of every slot, for before/after comparisons.
    pub fn snapshot(&self) -> Vec<(Slot, Option<String>)> {
        Slot::ALL
            .iter()
            .map(|&slot| (slot, self.store.get(slot).expect("store read")))
            .collect()
    }
}

/// Frame one JSON request.
pub fn frame(request: &Value) -> Vec<u8> {
    encode_frame(&serde_json::to_vec(request).expect("request JSON")).expect("frame")
}

/// Whether `signature` (base64) verifies over exactly `message` under `public_pem`.
pub fn verifies(public_pem: &str, message: &str, signature: &str) -> bool {
    let Ok(signature) = Signature::from_base64(signature) else {
        return false;
    };
    IdentityEngine::new()
        .verify(public_pem, SigningPayload::ChallengeToken(message), &signature)
        .unwrap_or(false)
}

/// A keypair that is not the trust anchor.
pub fn forger_keys() -> &'static KeyPair {
    static KEYS: OnceLock<KeyPair> = OnceLock::new();
    KEYS.get_or_init(|| {
        IdentityEngine::new()
            .generate_identity()
            .expect("forger keypair")
    })
}

/// Base64 signature over `message` by the forger key.
pub fn forge(message: &str) -> String {
    IdentityEngine::new()
        .sign(
            &forger_keys().private_pem,
            SigningPayload::ChallengeToken(message),
        )
        .expect("forged signature")
        .to_base64()
}

/// `data.publickey` of a response.
pub fn public_key_of(response: &Value) -> String {
    response["data"]["publickey"]
        .as_str()
        .expect("publickey in response")
        .to_owned()
}
