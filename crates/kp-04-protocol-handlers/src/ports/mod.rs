//! # Ports Layer
//!
//! - `inbound`: the API the request dispatcher drives
//! - `outbound`: dependencies the service needs from its environment

pub mod inbound;
pub mod outbound;
