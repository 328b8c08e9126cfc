//! Frame encoding.

use crate::errors::TransportError;
use std::io;

/// Hard cap on a frame body (10 MiB).
pub const MAX_FRAME_LEN: usize = 10 * 1024 * 1024;

/// Length of the little-endian prefix.
pub const PREFIX_LEN: usize = 4;

/// Check a declared body length against the framing rules.
pub fn check_len(len: usize) -> Result<(), TransportError> {
    if len == 0 {
        return Err(TransportError::ZeroLength);
    }
    if len > MAX_FRAME_LEN {
        return Err(TransportError::FrameTooLarge {
            len,
            max: MAX_FRAME_LEN,
        });
    }
    Ok(())
}

/// Prefix + body in a single buffer.
pub fn encode_frame(body: &[u8]) -> Result<Vec<u8>, TransportError> {
    check_len(body.len())?;
    let mut frame = Vec::with_capacity(PREFIX_LEN + body.len());
    frame.extend_from_slice(&(body.len() as u32).to_le_bytes());
    frame.extend_from_slice(body);
    Ok(frame)
}

/// Split a byte stream into frame bodies. A trailing partial frame is an error.
pub fn split_frames(mut bytes: &[u8]) -> io::Result<Vec<Vec<u8>>> {
    let mut frames = Vec::new();
    while !bytes.is_empty() {
        if bytes.len() < PREFIX_LEN {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        let mut prefix = [0u8; PREFIX_LEN];
        prefix.copy_from_slice(&bytes[..PREFIX_LEN]);
        let len = u32::from_le_bytes(prefix) as usize;
        let rest = &bytes[PREFIX_LEN..];
        if rest.len() < len {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        frames.push(rest[..len].to_vec());
        bytes = &rest[len..];
    }
    Ok(frames)
}
