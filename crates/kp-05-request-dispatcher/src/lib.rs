//! # Request Dispatcher (KP-05)
//!
//! Turns one request frame into one response envelope.
//!
//! ## Pipeline
//!
//! ```text
//! frame ─▶ envelope ─▶ Action ─▶ typed payload ─▶ Validate ─▶ KeeperApi
//!   │          │          │            │              │           │
//!   │   "invalid JSON  "unknown   "invalid      "<field> is    handler
//!   │     format"      action:"   payload       required"      error
//!   │                             format"
//!   └─────────────────────────── Response ◀───────────────────────┘
//! ```
//!
//! Every failure becomes a `success: false` envelope. Nothing here
//! terminates the connection.

pub mod dispatcher;
pub mod errors;
pub mod request;

pub use dispatcher::Dispatcher;
pub use errors::DispatchError;
pub use request::Request;
