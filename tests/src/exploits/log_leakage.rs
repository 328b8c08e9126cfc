//! # Log Leakage
//!
//! Diagnostics go to stderr, which browsers and crash reporters may
//! collect. A full session is run with logging captured at TRACE and the
//! log is searched for every secret the session produced.

#[cfg(test)]
mod tests {
    use crate::harness::{public_key_of, Host};
    use kp_01_credential_store::Slot;
    use kp_04_protocol_handlers::test_utils::{encrypt_for, server_sign};
    use parking_lot::Mutex;
    use serde_json::json;
    use shared_types::{KEY_MASK, PUBLIC_KEY_MASK, SESSION_CODE_MASK, SIGNATURE_MASK};
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Middle line of a PEM block, distinctive to that key.
    fn pem_fingerprint(pem: &str) -> String {
        pem.lines().nth(2).expect("PEM body").to_owned()
    }

    #[tokio::test]
    async fn test_secrets_never_reach_the_log() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let host = Host::in_memory();
        let signup = host
            .send(json!({"action": "signalias", "payload": {"alias": "bob"}}))
            .await;
        let public_pem = public_key_of(&signup);
        let ciphertext = encrypt_for(&public_pem, "sess-7c1d");
        let token = "challenge-31";

        let responses = host
            .send_all(&[
                json!({
                    "action": "savesessioncode",
                    "payload": {"encrypted_session_code": ciphertext, "signature": server_sign(&ciphertext)}
                }),
                json!({"action": "getsessioncode"}),
                json!({"action": "savedevicekey", "payload": {"key": "d3v1ce-s3cret"}}),
                json!({"action": "getdevicekey"}),
                json!({"action": "signaliaswithtimestamp", "payload": {"alias": "bob"}}),
                json!({
                    "action": "signchallengetoken",
                    "payload": {"challenge_token": token, "signature": server_sign(token)}
                }),
            ])
            .await;
        assert!(responses.iter().all(|r| r["success"] == true));

        let private_pem = host
            .store()
            .get(Slot::IdentityPrivate)
            .unwrap()
            .unwrap();
        let logged = log.contents();

        let secrets = [
            pem_fingerprint(&private_pem),
            pem_fingerprint(&public_pem),
            "sess-7c1d".to_owned(),
            "d3v1ce-s3cret".to_owned(),
            signup["data"]["signature"].as_str().unwrap().to_owned(),
            responses[4]["data"]["signature"].as_str().unwrap().to_owned(),
            responses[5]["data"]["signature"].as_str().unwrap().to_owned(),
        ];
        for secret in &secrets {
            assert!(!logged.contains(secret.as_str()), "log leaked {:?}", secret);
        }

        for mask in [KEY_MASK, PUBLIC_KEY_MASK, SESSION_CODE_MASK, SIGNATURE_MASK] {
            assert!(logged.contains(mask), "expected {} in log", mask);
        }
        assert!(logged.contains("signalias"));
    }
}
