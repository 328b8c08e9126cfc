//! # Messenger
//!
//! Reads request frames from and writes response frames to an async byte
//! duplex. Generic over the halves so tests can drive it in memory.

use crate::codec::{check_len, encode_frame, PREFIX_LEN};
use crate::errors::TransportError;
use shared_types::Response;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, Stdin, Stdout};
use tracing::{debug, info};

/// Messenger over the process's stdin/stdout.
pub type StdioMessenger = Messenger<Stdin, Stdout>;

/// Messenger bound to the process's standard streams.
pub fn stdio() -> StdioMessenger {
    Messenger::new(tokio::io::stdin(), tokio::io::stdout())
}

/// Framed request/response channel.
pub struct Messenger<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Messenger<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read the next frame body.
    ///
    /// Returns `Ok(None)` when the stream ends cleanly between frames.
    pub async fn read_frame(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        let mut prefix = [0u8; PREFIX_LEN];
        let mut filled = 0;
        while filled < PREFIX_LEN {
            let n = self
                .reader
                .read(&mut prefix[filled..])
                .await
                .map_err(TransportError::Io)?;
            if n == 0 {
                if filled == 0 {
                    debug!("input stream closed");
                    return Ok(None);
                }
                return Err(TransportError::Truncated {
                    expected: PREFIX_LEN,
                    received: filled,
                });
            }
            filled += n;
        }

        let len = u32::from_le_bytes(prefix) as usize;
        check_len(len)?;

        let mut body = vec![0u8; len];
        let mut received = 0;
        while received < len {
            let n = self
                .reader
                .read(&mut body[received..])
                .await
                .map_err(TransportError::Io)?;
            if n == 0 {
                return Err(TransportError::Truncated {
                    expected: len,
                    received,
                });
            }
            received += n;
        }

        debug!(len, "frame received");
        Ok(Some(body))
    }

    /// Serialize and write one response frame, then flush.
    pub async fn send_response(&mut self, response: &Response) -> Result<(), TransportError> {
        let body = serde_json::to_vec(response)?;
        let frame = encode_frame(&body)?;

        if let Ok(rendered) = serde_json::to_string(&response.redacted()) {
            info!(response = %rendered, "sending response");
        }

        self.writer
            .write_all(&frame)
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)?;
        Ok(())
    }

    /// Release the underlying halves.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
