//! # Error Types
//!
//! Errors produced by required-field checks on request payloads.

use thiserror::Error;

/// A request payload failed its required-field checks.
///
/// The `Display` text is surfaced verbatim to the caller, so it only ever
/// names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string field was missing or empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}
