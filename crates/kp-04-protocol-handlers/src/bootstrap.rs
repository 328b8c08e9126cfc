//! # Trust Anchor Bootstrap
//!
//! Installs the remote service's public key into the store on first run.
//! The key ships inside the binary as base64 of its PEM text. Once a key is
//! stored it is never replaced, and no request handler can write the slot.

use crate::domain::errors::KeeperError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use kp_01_credential_store::{CredentialStore, Slot};
use kp_02_identity_engine::IdentityApi;
use tracing::{debug, info};

/// Production server public key (base64 of an SPKI PEM, RSA-2048).
pub const EMBEDDED_SERVER_PUBLIC_KEY: &str = "LS0tLS1CRUdJTiBQVUJMSUMgS0VZLS0tLS0KTUlJQklqQU5CZ2txaGtpRzl3MEJBUUVGQUFPQ0FROEFNSUlCQ2dLQ0FRRUF3MG1NZ0FycExYVUhTemJmTGNudAowU1NhTEVhMnhCVms2SXNGTFlOVEl2NzdiZTdYdHhwZzRPd0hDc3JMMzAxV3R0Z2FEWDJBM0pYSnZEQ3FuNXJsCkZGbXNQY2RoeGxwbWdsRjNmODVSMW5KNlB6RW9Dekt1aVVjWE1pc21YSkJteGU2bEpDenZoWXJnbWpKT2xtMkUKY0xJUUpzelFvMUllRml3Mm5wN2c2TzNGSCt2aXRYSkRmV2toakV2RlFGQnd6aFp6cXZUT1o3SDNveUhGZ3RGSwpYeEJwOW5uN2N5L2RmRmVlYkRhSzBmVE1jQ2dEMWxGMjUwZDJMNDdPUmIrbkpEaklObjU4WkZxRVIvTkhWb3dpCnRyanFROU5mWG9rVVFYV2RCWHpjajZDMnNFbGRuR3B5TzFIUzhpYVEvM0RYeXZ2eG9oUWQrWTl3RDJqQnBOajkKYVFJREFRQUIKLS0tLS1FTkQgUFVCTElDIEtFWS0tLS0tCg==";

/// Outcome of [`ensure_trust_anchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorStatus {
    /// A key was already stored and was left untouched.
    AlreadyPresent,
    /// The embedded key was written.
    Installed,
}

/// Install `encoded_anchor` (base64 of a PEM public key) unless an anchor
/// is already stored.
pub fn ensure_trust_anchor(
    store: &dyn CredentialStore,
    identity: &dyn IdentityApi,
    encoded_anchor: &str,
) -> Result<AnchorStatus, KeeperError> {
    let existing = store
        .get(Slot::ServerTrustAnchor)
        .map_err(|e| KeeperError::TrustAnchor {
            reason: format!("{:?}", e),
        })?;
    if existing.is_some() {
        debug!("server public key already installed");
        return Ok(AnchorStatus::AlreadyPresent);
    }

    let decoded = STANDARD
        .decode(encoded_anchor.trim())
        .map_err(|e| KeeperError::TrustAnchor {
            reason: format!("embedded key is not valid base64: {}", e),
        })?;
    let pem = String::from_utf8(decoded).map_err(|_| KeeperError::TrustAnchor {
        reason: "embedded key is not valid UTF-8".into(),
    })?;
    identity
        .check_public_key(&pem)
        .map_err(|e| KeeperError::TrustAnchor {
            reason: format!("embedded key is not an RSA public key: {:?}", e),
        })?;

    store
        .set(Slot::ServerTrustAnchor, &pem)
        .map_err(|e| KeeperError::TrustAnchor {
            reason: format!("{:?}", e),
        })?;
    info!("installed server public key");
    Ok(AnchorStatus::Installed)
}
