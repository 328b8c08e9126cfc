//! # Requests
//!
//! Decoding of a frame into a [`Request`], the tagged union of every
//! action with its typed payload.

use crate::errors::DispatchError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use shared_types::{
    Action, EmptyRequest, GenerateKeypairRequest, SaveDeviceKeyRequest, SaveSessionCodeRequest,
    SignAliasRequest, SignAliasWithTimestampRequest, SignChallengeTokenRequest, Validate,
};

/// Envelope as received: the action is still an untyped tag.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    action: String,
    #[serde(default)]
    payload: Option<Value>,
}

/// A decoded, validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Ping,
    GenerateKeypair(GenerateKeypairRequest),
    GetDeviceKey,
    SaveDeviceKey(SaveDeviceKeyRequest),
    DeleteDeviceKey,
    GetSessionCode,
    SaveSessionCode(SaveSessionCodeRequest),
    GetPublicKey,
    GetServerPublicKey,
    SignAlias(SignAliasRequest),
    SignAliasWithTimestamp(SignAliasWithTimestampRequest),
    SignChallengeToken(SignChallengeTokenRequest),
}

impl Request {
    /// Decode and validate one frame body.
    pub fn decode(frame: &[u8]) -> Result<Self, DispatchError> {
        let envelope: RawEnvelope =
            serde_json::from_slice(frame).map_err(DispatchError::InvalidEnvelope)?;
        let action: Action = envelope
            .action
            .parse()
            .map_err(|_| DispatchError::UnknownAction(envelope.action.clone()))?;
        Self::from_parts(action, envelope.payload)
    }

    /// Build the request for `action` from its optional payload.
    pub fn from_parts(action: Action, payload: Option<Value>) -> Result<Self, DispatchError> {
        let request = match action {
            Action::Ping => {
                decode_payload::<EmptyRequest>(action, payload)?;
                Request::Ping
            }
            Action::GenerateKeypair => Request::GenerateKeypair(decode_payload(action, payload)?),
            Action::GetDeviceKey => {
                decode_payload::<EmptyRequest>(action, payload)?;
                Request::GetDeviceKey
            }
            Action::SaveDeviceKey => Request::SaveDeviceKey(decode_payload(action, payload)?),
            Action::DeleteDeviceKey => {
                decode_payload::<EmptyRequest>(action, payload)?;
                Request::DeleteDeviceKey
            }
            Action::GetSessionCode => {
                decode_payload::<EmptyRequest>(action, payload)?;
                Request::GetSessionCode
            }
            Action::SaveSessionCode => Request::SaveSessionCode(decode_payload(action, payload)?),
            Action::GetPublicKey => {
                decode_payload::<EmptyRequest>(action, payload)?;
                Request::GetPublicKey
            }
            Action::GetServerPublicKey => {
                decode_payload::<EmptyRequest>(action, payload)?;
                Request::GetServerPublicKey
            }
            Action::SignAlias => Request::SignAlias(decode_payload(action, payload)?),
            Action::SignAliasWithTimestamp => {
                Request::SignAliasWithTimestamp(decode_payload(action, payload)?)
            }
            Action::SignChallengeToken => {
                Request::SignChallengeToken(decode_payload(action, payload)?)
            }
        };
        Ok(request)
    }

    pub fn action(&self) -> Action {
        match self {
            Request::Ping => Action::Ping,
            Request::GenerateKeypair(_) => Action::GenerateKeypair,
            Request::GetDeviceKey => Action::GetDeviceKey,
            Request::SaveDeviceKey(_) => Action::SaveDeviceKey,
            Request::DeleteDeviceKey => Action::DeleteDeviceKey,
            Request::GetSessionCode => Action::GetSessionCode,
            Request::SaveSessionCode(_) => Action::SaveSessionCode,
            Request::GetPublicKey => Action::GetPublicKey,
            Request::GetServerPublicKey => Action::GetServerPublicKey,
            Request::SignAlias(_) => Action::SignAlias,
            Request::SignAliasWithTimestamp(_) => Action::SignAliasWithTimestamp,
            Request::SignChallengeToken(_) => Action::SignChallengeToken,
        }
    }
}

/// Decode an optional payload into `T` and run its required-field checks.
///
/// An absent or `null` payload decodes to `T::default()`. Any other
/// payload must be a JSON object; arrays are not read positionally.
pub fn decode_payload<T>(action: Action, payload: Option<Value>) -> Result<T, DispatchError>
where
    T: DeserializeOwned + Default + Validate,
{
    let invalid = |source: serde_json::Error| DispatchError::InvalidPayload { action, source };
    let decoded = match payload {
        None | Some(Value::Null) => T::default(),
        Some(value) => {
            let fields: Map<String, Value> = serde_json::from_value(value).map_err(invalid)?;
            serde_json::from_value(Value::Object(fields)).map_err(invalid)?
        }
    };
    decoded.validate()?;
    Ok(decoded)
}
