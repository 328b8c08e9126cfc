//! # Dispatch Errors
//!
//! Per-request decode failures. `Display` is the envelope message; parser
//! diagnostics are only reachable through `source()`.

use shared_types::{Action, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The frame is not a JSON request envelope.
    #[error("invalid JSON format")]
    InvalidEnvelope(#[source] serde_json::Error),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The payload does not fit the action's shape.
    #[error("invalid payload format")]
    InvalidPayload {
        action: Action,
        #[source]
        source: serde_json::Error,
    },

    /// A required field is missing or empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
