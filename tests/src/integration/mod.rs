//! Cross-crate flows: the extension's signup, login and device-linking
//! exchanges, plus transport-level behavior of the serve loop.

pub mod flows;
pub mod transport;
