//! # Keeper Telemetry
//!
//! Structured logging for the helper process.
//!
//! Stdout is the native-messaging channel, so every log line goes to
//! **stderr**. The browser captures stderr in its own diagnostics.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use keeper_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `KEEPER_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `KEEPER_JSON_LOGS` | `false` | One JSON object per line |
//! | `KEEPER_LOG_OUTPUT` | `true` | Set `false` to silence all output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_telemetry;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install log subscriber: {0}")]
    SubscriberInit(String),
}
