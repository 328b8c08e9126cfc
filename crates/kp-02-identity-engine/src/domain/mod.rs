//! # Domain Layer
//!
//! Pure cryptographic logic for the device identity.

pub mod encoding;
pub mod encryption;
pub mod errors;
pub mod keys;
pub mod payload;
pub mod signing;
