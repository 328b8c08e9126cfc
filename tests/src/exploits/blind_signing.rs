//! # Blind Signing
//!
//! A caller without the service's private key tries to obtain device
//! signatures or force a key rotation. Every attempt must fail before the
//! device key is touched.

#[cfg(test)]
mod tests {
    use crate::harness::{forge, public_key_of, Host};
    use kp_04_protocol_handlers::test_utils::server_sign;
    use serde_json::{json, Value};

    const REJECTED: &str =
        "signature verification failed: signature does not match server public key";

    async fn provisioned_host() -> (Host, String) {
        let host = Host::in_memory();
        let response = host
            .send(json!({"action": "signalias", "payload": {"alias": "victim"}}))
            .await;
        let pem = public_key_of(&response);
        (host, pem)
    }

    fn challenge(action: &str, token: &str, signature: &str) -> Value {
        json!({
            "action": action,
            "payload": {"challenge_token": token, "signature": signature}
        })
    }

    #[tokio::test]
    async fn test_forged_challenge_is_not_counter_signed() {
        let (host, _) = provisioned_host().await;
        let before = host.snapshot();

        let response = host
            .send(challenge("signchallengetoken", "tx:send:all", &forge("tx:send:all")))
            .await;

        assert_eq!(response, json!({"success": false, "error": REJECTED}));
        assert_eq!(host.snapshot(), before);
    }

    #[tokio::test]
    async fn test_replayed_signature_on_other_token_is_refused() {
        let (host, _) = provisioned_host().await;
        let genuine = server_sign("login-nonce-1");

        let response = host
            .send(challenge("signchallengetoken", "login-nonce-2", &genuine))
            .await;

        assert_eq!(response["error"], REJECTED);
    }

    #[tokio::test]
    async fn test_forged_rotation_keeps_identity_and_session() {
        let (host, pem) = provisioned_host().await;
        host.store()
            .set(kp_01_credential_store::Slot::SessionCredential, "sess-live")
            .unwrap();
        let before = host.snapshot();

        let response = host
            .send(challenge("generatekeypair", "link", &forge("link")))
            .await;

        assert_eq!(response["success"], false);
        assert_eq!(host.snapshot(), before);
        let current = host.send(json!({"action": "getpublickey"})).await;
        assert_eq!(public_key_of(&current), pem);
    }

    #[tokio::test]
    async fn test_forged_session_code_is_not_stored() {
        let (host, pem) = provisioned_host().await;
        let ciphertext = kp_04_protocol_handlers::test_utils::encrypt_for(&pem, "attacker-session");
        let before = host.snapshot();

        let response = host
            .send(json!({
                "action": "savesessioncode",
                "payload": {"encrypted_session_code": ciphertext, "signature": forge(&ciphertext)}
            }))
            .await;

        assert_eq!(response["error"], REJECTED);
        assert_eq!(host.snapshot(), before);
    }

    #[tokio::test]
    async fn test_garbage_signature_is_rejected_safely() {
        let (host, _) = provisioned_host().await;

        let response = host
            .send(challenge("signchallengetoken", "tok", "%%%not-base64%%%"))
            .await;

        assert_eq!(response["success"], false);
        let message = response["error"].as_str().unwrap();
        assert!(message.starts_with("failed to decode signature"));
    }

    #[tokio::test]
    async fn test_challenge_before_signup_reports_not_registered() {
        let host = Host::in_memory();
        let response = host
            .send(challenge("signchallengetoken", "tok", &server_sign("tok")))
            .await;
        assert_eq!(
            response["error"],
            "device not registered. please complete signup first"
        );
    }
}
