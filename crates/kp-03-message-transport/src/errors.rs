//! # Transport Errors
//!
//! Every variant is fatal to the connection.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// Declared or produced frame exceeds the cap.
    #[error("frame of {len} bytes exceeds maximum of {max} bytes")]
    FrameTooLarge { len: usize, max: usize },

    #[error("zero-length frame")]
    ZeroLength,

    /// Stream ended inside a length prefix or body.
    #[error("stream ended after {received} of {expected} bytes")]
    Truncated { expected: usize, received: usize },

    #[error("failed to read frame: {0}")]
    Io(#[source] io::Error),

    #[error("failed to write frame: {0}")]
    Write(#[source] io::Error),

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TransportError {
    /// Message suitable for the peer. I/O and serializer diagnostics are
    /// replaced by a fixed description.
    pub fn safe_message(&self) -> String {
        match self {
            TransportError::Io(_) => "failed to read message".into(),
            TransportError::Write(_) => "failed to write message".into(),
            TransportError::Serialize(_) => "failed to serialize response".into(),
            other => other.to_string(),
        }
    }
}
