//! # Shared Types Crate
//!
//! Wire model for the Keeper native-messaging protocol.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the action set, payload shapes and response
//!   envelope are defined once and consumed by every other crate.
//! - **Closed Action Set**: [`Action`] is a fixed enum; anything else is an
//!   unknown action and is safe to echo back.
//! - **Redaction on Copies**: [`Response::redacted`] returns a masked copy for
//!   diagnostics and never touches the value sent on the wire.

pub mod action;
pub mod errors;
pub mod requests;
pub mod responses;

pub use action::Action;
pub use errors::ValidationError;
pub use requests::*;
pub use responses::*;
