//! Static identity of the running executable, reported by `ping`.

use shared_types::PingData;

/// Version, content hash and install path of the running binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    /// Lowercase hex SHA-256 of the executable file.
    pub hash: String,
    /// Absolute path of the executable.
    pub path: String,
}

impl BuildInfo {
    pub fn new(
        version: impl Into<String>,
        hash: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            hash: hash.into(),
            path: path.into(),
        }
    }
}

impl From<&BuildInfo> for PingData {
    fn from(info: &BuildInfo) -> Self {
        PingData {
            version: info.version.clone(),
            hash: info.hash.clone(),
            path: info.path.clone(),
        }
    }
}
