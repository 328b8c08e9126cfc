//! # Domain Layer
//!
//! Slot identifiers and the store error type.

pub mod errors;
pub mod slot;
