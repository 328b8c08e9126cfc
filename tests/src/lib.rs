//! # Keeper Test Suite
//!
//! Unified test crate driving the host end to end: requests are framed,
//! pushed through the same serve loop the binary runs, and the framed
//! responses decoded again.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # In-process host + framing helpers
//! ├── integration/      # Signup, login, linking and restart flows
//! └── exploits/         # Attack simulations
//!     ├── blind_signing.rs
//!     ├── trust_anchor.rs
//!     └── log_leakage.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p kp-tests
//! cargo test -p kp-tests integration::
//! cargo test -p kp-tests exploits::
//! ```

pub mod exploits;
pub mod harness;
pub mod integration;
