//! Service configuration loaded via OrthoConfig.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use backend::dataset::DatasetSource;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration values controlling the server and the dataset source.
///
/// Every field is optional; accessors fall back to the bundled defaults, so
/// the binary runs with no configuration at all.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Override for the dataset resource path.
    pub dataset_path: Option<PathBuf>,
    /// Whether the resource's first row is a header to skip.
    pub has_header: Option<bool>,
}

impl DirectorySettings {
    /// Resolve the bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns the parse failure when the configured value is not a valid
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Resolve the dataset source, falling back to the bundled resource.
    #[must_use]
    pub fn dataset_source(&self) -> DatasetSource {
        let bundled = DatasetSource::bundled();
        DatasetSource {
            path: self.dataset_path.clone().unwrap_or(bundled.path),
            has_header: self.has_header.unwrap_or(bundled.has_header),
        }
    }
}
