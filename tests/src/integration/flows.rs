//! # Protocol Flows
//!
//! ## Flows Tested
//!
//! 1. **Signup**: `signalias` provisions an identity, `savesessioncode`
//!    authenticates it
//! 2. **Login**: `signaliaswithtimestamp` signs `alias:timestamp`
//! 3. **Linking**: `generatekeypair` rotates the identity and drops the session
//! 4. **Restart**: a file-backed store carries everything across processes

#[cfg(test)]
mod tests {
    use crate::harness::{public_key_of, verifies, Host};
    use kp_01_credential_store::{CredentialStore, FileCredentialStore, Slot};
    use kp_04_protocol_handlers::test_utils::{encrypt_for, server_sign};
    use serde_json::{json, Value};
    use std::sync::Arc;

    // =============================================================================
    // HELPERS
    // =============================================================================

    async fn sign_up(host: &Host, alias: &str) -> Value {
        let response = host
            .send(json!({"action": "signalias", "payload": {"alias": alias}}))
            .await;
        assert_eq!(response["success"], true, "signup failed: {}", response);
        response
    }

    async fn save_session(host: &Host, public_pem: &str, code: &str) -> Value {
        let ciphertext = encrypt_for(public_pem, code);
        host.send(json!({
            "action": "savesessioncode",
            "payload": {
                "encrypted_session_code": ciphertext,
                "signature": server_sign(&ciphertext),
            }
        }))
        .await
    }

    // =============================================================================
    // SIGNUP
    // =============================================================================

    #[tokio::test]
    async fn test_signup_signature_verifies_over_alias() {
        let host = Host::in_memory();

        let response = sign_up(&host, "bob").await;
        let public_pem = public_key_of(&response);
        let signature = response["data"]["signature"].as_str().unwrap();

        assert!(verifies(&public_pem, "bob", signature));
        assert!(!verifies(&public_pem, "alice", signature));
        assert_eq!(
            host.store().get(Slot::IdentityPublic).unwrap().as_deref(),
            Some(public_pem.as_str())
        );
    }

    #[tokio::test]
    async fn test_signup_then_session_code_round_trip() {
        let host = Host::in_memory();
        let public_pem = public_key_of(&sign_up(&host, "bob").await);

        let saved = save_session(&host, &public_pem, "sess-9f2c").await;
        assert_eq!(
            saved,
            json!({"success": true, "data": {"session_code": "sess-9f2c"}})
        );

        let fetched = host.send(json!({"action": "getsessioncode"})).await;
        assert_eq!(fetched["data"]["session_code"], "sess-9f2c");
    }

    #[tokio::test]
    async fn test_double_signup_is_refused() {
        let host = Host::in_memory();
        let public_pem = public_key_of(&sign_up(&host, "bob").await);
        save_session(&host, &public_pem, "sess-1").await;
        let before = host.snapshot();

        let again = host
            .send(json!({"action": "signalias", "payload": {"alias": "bob"}}))
            .await;

        assert_eq!(again["success"], false);
        assert!(again["error"]
            .as_str()
            .unwrap()
            .starts_with("device already registered"));
        assert_eq!(host.snapshot(), before);
    }

    #[tokio::test]
    async fn test_signup_without_session_may_be_repeated() {
        let host = Host::in_memory();
        let first = public_key_of(&sign_up(&host, "bob").await);
        let second = public_key_of(&sign_up(&host, "bob").await);
        assert_ne!(first, second);
    }

    // =============================================================================
    // LOGIN
    // =============================================================================

    #[tokio::test]
    async fn test_login_signature_covers_alias_and_timestamp() {
        let host = Host::in_memory();
        let public_pem = public_key_of(&sign_up(&host, "bob").await);

        let response = host
            .send(json!({"action": "signaliaswithtimestamp", "payload": {"alias": "bob"}}))
            .await;
        assert_eq!(response["success"], true);

        let timestamp = response["data"]["timestamp"].as_i64().unwrap();
        let signature = response["data"]["signature"].as_str().unwrap();
        assert!(timestamp > 0);
        assert!(verifies(&public_pem, &format!("bob:{}", timestamp), signature));
        assert!(!verifies(&public_pem, "bob", signature));
    }

    #[tokio::test]
    async fn test_login_before_signup_is_distinct() {
        let host = Host::in_memory();
        let response = host
            .send(json!({"action": "signaliaswithtimestamp", "payload": {"alias": "bob"}}))
            .await;
        assert_eq!(
            response,
            json!({"success": false, "error": "device not registered. please complete signup first"})
        );
    }

    // =============================================================================
    // DEVICE LINKING
    // =============================================================================

    #[tokio::test]
    async fn test_generatekeypair_rotates_identity_and_drops_session() {
        let host = Host::in_memory();
        let old_pem = public_key_of(&sign_up(&host, "bob").await);
        save_session(&host, &old_pem, "sess-1").await;

        let token = "link-challenge-7";
        let rotated = host
            .send(json!({
                "action": "generatekeypair",
                "payload": {"challenge_token": token, "signature": server_sign(token)}
            }))
            .await;
        assert_eq!(rotated["success"], true);
        let new_pem = public_key_of(&rotated);
        assert_ne!(new_pem, old_pem);

        let responses = host
            .send_all(&[
                json!({"action": "getsessioncode"}),
                json!({"action": "getpublickey"}),
                json!({"action": "getpublickey"}),
            ])
            .await;
        assert_eq!(responses[0]["success"], false);
        assert_eq!(public_key_of(&responses[1]), new_pem);
        assert_eq!(public_key_of(&responses[2]), new_pem);
    }

    #[tokio::test]
    async fn test_challenge_counter_signature_uses_device_key() {
        let host = Host::in_memory();
        let public_pem = public_key_of(&sign_up(&host, "bob").await);

        let token = "nonce-5a1e";
        let response = host
            .send(json!({
                "action": "signchallengetoken",
                "payload": {"challenge_token": token, "signature": server_sign(token)}
            }))
            .await;
        assert_eq!(response["success"], true);
        assert!(verifies(
            &public_pem,
            token,
            response["data"]["signature"].as_str().unwrap()
        ));
    }

    // =============================================================================
    // DEVICE SECRET + ACCESSORS
    // =============================================================================

    #[tokio::test]
    async fn test_device_secret_lifecycle() {
        let host = Host::in_memory();
        let responses = host
            .send_all(&[
                json!({"action": "savedevicekey", "payload": {"key": "d3v1ce"}}),
                json!({"action": "getdevicekey"}),
                json!({"action": "deletedevicekey"}),
                json!({"action": "deletedevicekey"}),
                json!({"action": "getdevicekey"}),
            ])
            .await;

        assert_eq!(responses[0], json!({"success": true}));
        assert_eq!(responses[1]["data"]["key"], "d3v1ce");
        assert_eq!(responses[2], json!({"success": true}));
        assert_eq!(responses[3], json!({"success": true}));
        assert_eq!(responses[4]["success"], false);
    }

    #[tokio::test]
    async fn test_server_public_key_is_the_anchor() {
        let host = Host::in_memory();
        let response = host.send(json!({"action": "getserverpubkey"})).await;
        assert_eq!(
            public_key_of(&response),
            kp_04_protocol_handlers::test_utils::server_keys().public_pem
        );
    }

    #[tokio::test]
    async fn test_unknown_action_touches_nothing() {
        let host = Host::in_memory();
        sign_up(&host, "bob").await;
        let before = host.snapshot();

        let response = host
            .send(json!({"action": "wipeeverything", "payload": {"alias": "bob"}}))
            .await;

        assert_eq!(
            response,
            json!({"success": false, "error": "unknown action: wipeeverything"})
        );
        assert_eq!(host.snapshot(), before);
    }

    #[tokio::test]
    async fn test_validation_message_is_surfaced() {
        let host = Host::in_memory();
        let responses = host
            .send_all(&[
                json!({"action": "signalias"}),
                json!({"action": "signalias", "payload": {"alias": 7}}),
                json!({"action": "signchallengetoken", "payload": {"challenge_token": "t"}}),
            ])
            .await;
        assert_eq!(responses[0]["error"], "alias is required");
        assert_eq!(responses[1]["error"], "invalid payload format");
        assert_eq!(responses[2]["error"], "signature is required");
    }

    // =============================================================================
    // RESTART
    // =============================================================================

    #[tokio::test]
    async fn test_file_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let public_pem = {
            let host = Host::over(Arc::new(FileCredentialStore::open(&path).unwrap()));
            let pem = public_key_of(&sign_up(&host, "bob").await);
            save_session(&host, &pem, "sess-restart").await;
            pem
        };

        let host = Host::over(Arc::new(FileCredentialStore::open(&path).unwrap()));
        let responses = host
            .send_all(&[
                json!({"action": "getpublickey"}),
                json!({"action": "getsessioncode"}),
                json!({"action": "signaliaswithtimestamp", "payload": {"alias": "bob"}}),
            ])
            .await;

        assert_eq!(public_key_of(&responses[0]), public_pem);
        assert_eq!(responses[1]["data"]["session_code"], "sess-restart");
        let timestamp = responses[2]["data"]["timestamp"].as_i64().unwrap();
        assert!(verifies(
            &public_pem,
            &format!("bob:{}", timestamp),
            responses[2]["data"]["signature"].as_str().unwrap()
        ));
    }
}
