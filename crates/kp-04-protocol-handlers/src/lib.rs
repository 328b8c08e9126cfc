//! # Protocol Handlers (KP-04)
//!
//! The stateful half of Keeper: signup, login, device linking and the plain
//! slot accessors, all enforcing who may sign what and when.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): errors, provisioning state, build identity
//! - **Ports Layer** (`ports/`): `KeeperApi` (inbound), `TimeSource` (outbound)
//! - **Service Layer** (`service/`): `KeeperService`
//! - **Bootstrap** (`bootstrap.rs`): first-run trust anchor installation
//!
//! ## State Machine
//!
//! ```text
//! UNPROVISIONED ──signalias / generatekeypair──▶ PROVISIONED
//! PROVISIONED ──savesessioncode──▶ AUTHENTICATED
//! AUTHENTICATED ──generatekeypair──▶ PROVISIONED (session invalidated)
//! ```
//!
//! The state is never stored. It is derived from which slots are populated.
//!
//! ## Security Notes
//!
//! - The server trust anchor is written once at bootstrap and never again
//! - Every challenge flow verifies the server's signature before signing
//!   or touching the store

pub mod bootstrap;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use bootstrap::{ensure_trust_anchor, AnchorStatus, EMBEDDED_SERVER_PUBLIC_KEY};
pub use domain::build_info::BuildInfo;
pub use domain::errors::KeeperError;
pub use domain::state::ProvisioningState;
pub use ports::inbound::KeeperApi;
pub use ports::outbound::{FixedClock, SystemClock, TimeSource};
pub use service::KeeperService;
