//! Build identity reported by `ping`.

use kp_04_protocol_handlers::BuildInfo;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::warn;

/// Reported when the executable cannot be read back.
pub const UNKNOWN_HASH: &str = "unknown";

/// Version, SHA-256 of the running executable, and its absolute path.
///
/// Computed once at startup. A failure to read the executable degrades the
/// hash to [`UNKNOWN_HASH`] instead of refusing to start.
pub fn current_build_info() -> BuildInfo {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe.canonicalize().unwrap_or(exe),
        Err(e) => {
            warn!(error = %e, "cannot locate running executable");
            return BuildInfo::new(env!("CARGO_PKG_VERSION"), UNKNOWN_HASH, "");
        }
    };

    let hash = file_sha256(&exe).unwrap_or_else(|e| {
        warn!(error = %e, path = %exe.display(), "cannot hash running executable");
        UNKNOWN_HASH.to_owned()
    });

    BuildInfo::new(
        env!("CARGO_PKG_VERSION"),
        hash,
        exe.display().to_string(),
    )
}

/// Lowercase hex SHA-256 of a file's contents.
pub fn file_sha256(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
