//! # Response Envelope
//!
//! `{"success": bool, "data": <object, optional>, "error": <string, optional>}`
//!
//! ## Redaction
//!
//! Responses carry key material, session codes and signatures. Anything
//! written to the diagnostic log goes through [`Response::redacted`], which
//! masks those fields on a copy.

use serde::{Deserialize, Serialize};

/// Placeholder for device secrets.
pub const KEY_MASK: &str = "[KEY_MASKED]";
/// Placeholder for public keys.
pub const PUBLIC_KEY_MASK: &str = "[PUBLIC_KEY_MASKED]";
/// Placeholder for session codes.
pub const SESSION_CODE_MASK: &str = "[SESSION_CODE_MASKED]";
/// Placeholder for signatures.
pub const SIGNATURE_MASK: &str = "[SIGNATURE_MASKED]";

/// Uniform response envelope returned for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Successful response carrying data.
    pub fn ok(data: impl Into<ResponseData>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            error: None,
        }
    }

    /// Successful response without data.
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Failed response with a caller-safe message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Copy of this response with every secret-bearing field masked.
    pub fn redacted(&self) -> Self {
        Self {
            success: self.success,
            data: self.data.as_ref().map(ResponseData::redacted),
            error: self.error.clone(),
        }
    }
}

// =============================================================================
// RESPONSE DATA
// =============================================================================

/// Action-specific response payloads.
///
/// Serialized untagged: the wire shape is the inner struct. Variant order
/// matters for deserialization, more specific shapes come first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Ping(PingData),
    SignAlias(SignAliasData),
    SignAliasWithTimestamp(TimestampedSignatureData),
    Signature(SignatureData),
    PublicKey(PublicKeyData),
    DeviceKey(DeviceKeyData),
    SessionCode(SessionCodeData),
}

impl ResponseData {
    fn redacted(&self) -> Self {
        match self {
            ResponseData::Ping(data) => ResponseData::Ping(data.clone()),
            ResponseData::SignAlias(_) => ResponseData::SignAlias(SignAliasData {
                signature: SIGNATURE_MASK.into(),
                public_key: PUBLIC_KEY_MASK.into(),
            }),
            ResponseData::SignAliasWithTimestamp(data) => {
                ResponseData::SignAliasWithTimestamp(TimestampedSignatureData {
                    signature: SIGNATURE_MASK.into(),
                    timestamp: data.timestamp,
                })
            }
            ResponseData::Signature(_) => ResponseData::Signature(SignatureData {
                signature: SIGNATURE_MASK.into(),
            }),
            ResponseData::PublicKey(_) => ResponseData::PublicKey(PublicKeyData {
                public_key: PUBLIC_KEY_MASK.into(),
            }),
            ResponseData::DeviceKey(_) => ResponseData::DeviceKey(DeviceKeyData {
                key: KEY_MASK.into(),
            }),
            ResponseData::SessionCode(_) => ResponseData::SessionCode(SessionCodeData {
                session_code: SESSION_CODE_MASK.into(),
            }),
        }
    }
}

/// `ping`: static build identity of the running executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingData {
    pub version: String,
    pub hash: String,
    pub path: String,
}

/// `signalias`: signature over the alias plus the freshly generated public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignAliasData {
    pub signature: String,
    #[serde(rename = "publickey")]
    pub public_key: String,
}

/// `signaliaswithtimestamp`: signature over `alias:timestamp` and the
/// timestamp that was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedSignatureData {
    pub signature: String,
    pub timestamp: i64,
}

/// `signchallengetoken`: counter-signature over the challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureData {
    pub signature: String,
}

/// `generatekeypair`, `getpublickey`, `getserverpubkey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyData {
    #[serde(rename = "publickey")]
    pub public_key: String,
}

/// `getdevicekey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceKeyData {
    pub key: String,
}

/// `savesessioncode`, `getsessioncode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCodeData {
    pub session_code: String,
}

macro_rules! impl_into_response_data {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ResponseData {
                fn from(data: $ty) -> Self {
                    ResponseData::$variant(data)
                }
            }
        )*
    };
}

impl_into_response_data! {
    PingData => Ping,
    SignAliasData => SignAlias,
    TimestampedSignatureData => SignAliasWithTimestamp,
    SignatureData => Signature,
    PublicKeyData => PublicKey,
    DeviceKeyData => DeviceKey,
    SessionCodeData => SessionCode,
}
