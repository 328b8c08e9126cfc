//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for process logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup line
    pub service_name: String,

    /// `EnvFilter` directive (e.g. `info`, `kp_04_protocol_handlers=debug`)
    pub log_level: String,

    /// Whether to emit JSON lines instead of plain text
    pub json_logs: bool,

    /// Whether to emit anything at all
    pub log_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "keeper".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            log_output: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KEEPER_SERVICE_NAME`: Service name (default: keeper)
    /// - `KEEPER_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `KEEPER_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `KEEPER_LOG_OUTPUT`: Enable log output (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_name: lookup("KEEPER_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("KEEPER_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("KEEPER_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            log_output: lookup("KEEPER_LOG_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.log_output),
        }
    }
}
