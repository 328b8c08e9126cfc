//! # Keeper Runtime
//!
//! Process wiring for the native-messaging host.
//!
//! ## Startup Sequence
//!
//! 1. Parse configuration (CLI flags, then environment)
//! 2. Initialize logging (stderr)
//! 3. Compute the build identity reported by `ping`
//! 4. Open the credential store
//! 5. Install the server trust anchor if absent
//! 6. Serve frames sequentially until end of input
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Input closed at a frame boundary |
//! | 1 | Transport error, or startup failed before the loop |

pub mod build_info;
pub mod config;
pub mod runtime;
pub mod store;

pub use build_info::current_build_info;
pub use config::{RuntimeConfig, StoreKind};
pub use runtime::{build_dispatcher, serve};
pub use store::open_store;
