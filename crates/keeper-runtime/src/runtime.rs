//! # Serve Loop
//!
//! One frame is read, dispatched and answered before the next read begins.
//! Handler failures become error envelopes inside the dispatcher, and a
//! panic while handling a request is answered with [`INTERNAL_ERROR`].
//! Only transport errors leave the loop.

use kp_01_credential_store::CredentialStore;
use kp_02_identity_engine::IdentityEngine;
use kp_03_message_transport::{Messenger, TransportError};
use kp_04_protocol_handlers::{
    ensure_trust_anchor, BuildInfo, KeeperApi, KeeperError, KeeperService,
};
use kp_05_request_dispatcher::Dispatcher;
use shared_types::Response;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{error, info};

/// Reply to a request whose handler panicked.
pub const INTERNAL_ERROR: &str = "internal error";

/// Install the trust anchor and wire a dispatcher over `store`.
pub fn build_dispatcher(
    store: Arc<dyn CredentialStore>,
    build: BuildInfo,
    encoded_anchor: &str,
) -> Result<Dispatcher<KeeperService>, KeeperError> {
    ensure_trust_anchor(store.as_ref(), &IdentityEngine::new(), encoded_anchor)?;
    Ok(Dispatcher::new(KeeperService::new(store, build)))
}

/// Serve requests until the input ends at a frame boundary.
///
/// On a transport error an error envelope is written if the output still
/// accepts it, and the error is returned.
pub async fn serve<R, W, A>(
    messenger: &mut Messenger<R, W>,
    dispatcher: &Dispatcher<A>,
) -> Result<(), TransportError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    A: KeeperApi,
{
    let mut served: u64 = 0;
    loop {
        let frame = match messenger.read_frame().await {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                info!(served, "input closed, shutting down");
                return Ok(());
            }
            Err(err) => {
                error!(error = %err, "failed to read message");
                let _ = messenger
                    .send_response(&Response::error(err.safe_message()))
                    .await;
                return Err(err);
            }
        };

        let response = handle_guarded(dispatcher, &frame);
        if let Err(err) = messenger.send_response(&response).await {
            error!(error = %err, "failed to send response");
            return Err(err);
        }
        served += 1;
    }
}

fn handle_guarded<A: KeeperApi>(dispatcher: &Dispatcher<A>, frame: &[u8]) -> Response {
    panic::catch_unwind(AssertUnwindSafe(|| dispatcher.handle(frame))).unwrap_or_else(|cause| {
        let reason = cause
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| cause.downcast_ref::<String>().cloned())
            .unwrap_or_default();
        error!(reason = %reason, "request handler panicked");
        Response::error(INTERNAL_ERROR)
    })
}
