//! # Outbound Ports (Driven Ports)
//!
//! The credential store and identity engine ports live in their own crates
//! (`kp-01`, `kp-02`). This module holds the remaining dependency: time.

use chrono::Utc;

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current time in whole seconds since the Unix epoch.
    fn now_unix(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_unix(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl TimeSource for FixedClock {
    fn now_unix(&self) -> i64 {
        self.0
    }
}
