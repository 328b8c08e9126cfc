//! Attack simulations against the host.
//!
//! Each module models one adversary: a web page trying to make the device
//! sign arbitrary data, a local attacker swapping the trust anchor, and an
//! observer reading the diagnostic log.

pub mod blind_signing;
pub mod log_leakage;
