//! # Dispatcher
//!
//! Routes decoded requests to a `KeeperApi` and renders the outcome as a
//! response envelope.

use crate::request::Request;
use kp_04_protocol_handlers::KeeperApi;
use shared_types::Response;
use std::error::Error as _;
use tracing::{info, warn};

/// Request dispatcher bound to one Keeper API instance.
pub struct Dispatcher<A> {
    api: A,
}

impl<A: KeeperApi> Dispatcher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Decode one frame body and produce its response.
    pub fn handle(&self, frame: &[u8]) -> Response {
        match Request::decode(frame) {
            Ok(request) => self.dispatch(request),
            Err(err) => {
                let cause = err.source().map(|source| source.to_string());
                warn!(error = %err, cause = ?cause, "rejected request");
                Response::error(err.to_string())
            }
        }
    }

    /// Invoke the handler bound to a decoded request.
    pub fn dispatch(&self, request: Request) -> Response {
        let action = request.action();
        info!(action = %action, "handling request");

        let result = match request {
            Request::Ping => Ok(Response::ok(self.api.ping())),
            Request::GenerateKeypair(req) => self.api.generate_keypair(&req).map(Response::ok),
            Request::GetDeviceKey => self.api.get_device_key().map(Response::ok),
            Request::SaveDeviceKey(req) => self
                .api
                .save_device_key(&req)
                .map(|()| Response::ok_empty()),
            Request::DeleteDeviceKey => self.api.delete_device_key().map(|()| Response::ok_empty()),
            Request::GetSessionCode => self.api.get_session_code().map(Response::ok),
            Request::SaveSessionCode(req) => self.api.save_session_code(&req).map(Response::ok),
            Request::GetPublicKey => self.api.get_public_key().map(Response::ok),
            Request::GetServerPublicKey => self.api.get_server_public_key().map(Response::ok),
            Request::SignAlias(req) => self.api.sign_alias(&req).map(Response::ok),
            Request::SignAliasWithTimestamp(req) => {
                self.api.sign_alias_with_timestamp(&req).map(Response::ok)
            }
            Request::SignChallengeToken(req) => {
                self.api.sign_challenge_token(&req).map(Response::ok)
            }
        };

        result.unwrap_or_else(|err| {
            warn!(action = %action, error = ?err, "request failed");
            Response::error(err.safe_message())
        })
    }
}
