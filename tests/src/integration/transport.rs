//! # Transport Behavior
//!
//! Framing failures seen through the full serve loop.

#[cfg(test)]
mod tests {
    use crate::harness::{frame, Host};
    use kp_03_message_transport::{TransportError, MAX_FRAME_LEN};
    use serde_json::json;

    #[tokio::test]
    async fn test_oversized_frame_rejected_before_body_read() {
        let host = Host::in_memory();
        let mut input = ((MAX_FRAME_LEN + 1) as u32).to_le_bytes().to_vec();
        input.extend(frame(&json!({"action": "ping"})));

        let transcript = host.send_raw(input).await;

        assert!(matches!(
            transcript.result,
            Err(TransportError::FrameTooLarge {
                len: 10_485_761,
                ..
            })
        ));
        assert_eq!(transcript.consumed, 4);
        assert_eq!(transcript.responses.len(), 1);
        assert_eq!(transcript.responses[0]["success"], false);
    }

    #[tokio::test]
    async fn test_frame_at_cap_is_not_rejected_by_size() {
        let host = Host::in_memory();
        let mut input = (MAX_FRAME_LEN as u32).to_le_bytes().to_vec();
        input.extend_from_slice(b"{}");

        let transcript = host.send_raw(input).await;

        // Accepted by size, then the stream ends inside the body.
        assert!(matches!(
            transcript.result,
            Err(TransportError::Truncated { .. })
        ));
    }

    #[tokio::test]
    async fn test_zero_length_frame_is_fatal() {
        let host = Host::in_memory();
        let mut input = frame(&json!({"action": "ping"}));
        input.extend_from_slice(&0u32.to_le_bytes());
        input.extend(frame(&json!({"action": "ping"})));

        let transcript = host.send_raw(input).await;

        assert!(matches!(transcript.result, Err(TransportError::ZeroLength)));
        assert_eq!(transcript.responses.len(), 2);
        assert_eq!(transcript.responses[0]["success"], true);
        assert_eq!(transcript.responses[1]["success"], false);
    }

    #[tokio::test]
    async fn test_truncated_prefix_is_fatal() {
        let host = Host::in_memory();
        let mut input = frame(&json!({"action": "ping"}));
        input.extend_from_slice(&[0x10, 0x00]);

        let transcript = host.send_raw(input).await;

        assert!(matches!(
            transcript.result,
            Err(TransportError::Truncated {
                expected: 4,
                received: 2
            })
        ));
        assert_eq!(transcript.responses[0]["success"], true);
    }

    #[tokio::test]
    async fn test_malformed_json_keeps_the_loop_alive() {
        let host = Host::in_memory();
        let mut input = kp_03_message_transport::encode_frame(b"{not json").unwrap();
        input.extend(frame(&json!({"action": "ping"})));

        let transcript = host.send_raw(input).await;

        assert!(transcript.result.is_ok());
        assert_eq!(
            transcript.responses[0],
            json!({"success": false, "error": "invalid JSON format"})
        );
        assert_eq!(transcript.responses[1]["success"], true);
    }

    #[tokio::test]
    async fn test_ping_reports_build_identity() {
        let host = Host::in_memory();
        let response = host.send(json!({"action": "ping"})).await;
        let data = &response["data"];
        assert_eq!(data["version"], "0.1.0");
        assert_eq!(data["hash"].as_str().unwrap().len(), 64);
        assert_eq!(data["path"], "/opt/keeper/keeper-host");
    }
}
