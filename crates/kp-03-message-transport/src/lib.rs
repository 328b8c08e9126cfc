//! # Message Transport (KP-03)
//!
//! Framing for the browser native-messaging channel.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────────────────┬──────────────────────────────┐
//! │ length: u32 (LE, 4B) │ body: `length` bytes of JSON │
//! └──────────────────────┴──────────────────────────────┘
//! ```
//!
//! - Maximum body: [`MAX_FRAME_LEN`] bytes, checked before the body is read
//! - Zero-length frames are rejected
//! - End of stream exactly at a frame boundary is a clean shutdown
//!
//! ## Logging
//!
//! Every outbound response is logged after redaction. The bytes written to
//! the channel are never redacted.

pub mod codec;
pub mod errors;
pub mod messenger;

pub use codec::{encode_frame, split_frames, MAX_FRAME_LEN};
pub use errors::TransportError;
pub use messenger::{stdio, Messenger, StdioMessenger};
