use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::archive::cdn::DEFAULT_CDN_URL;
use crate::catalog::omaha::DEFAULT_CATALOG_URL;
use crate::error::ConfigError;

// =============================================================================
// Network-related constants
// =============================================================================

/// Timeout for establishing a connection in milliseconds (30 seconds)
pub const CONNECT_TIMEOUT_MS: u64 = 30_000;

/// Maximum time without receiving data in milliseconds (5 minutes)
pub const READ_TIMEOUT_MS: u64 = 300_000;

/// Installer configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallerConfig {
    pub catalog_url: String,
    pub cdn_url: String,
    /// Extraction target; defaults to [`default_output_dir`]
    pub output_dir: Option<PathBuf>,
    /// Directory for the temporary archive; defaults to the system temp dir
    pub temp_dir: Option<PathBuf>,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            cdn_url: DEFAULT_CDN_URL.to_string(),
            output_dir: None,
            temp_dir: None,
            connect_timeout_ms: CONNECT_TIMEOUT_MS,
            read_timeout_ms: READ_TIMEOUT_MS,
        }
    }
}

impl InstallerConfig {
    /// Load a JSON configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

/// Returns the path to the data directory for chromium-fetch.
/// Uses $XDG_DATA_HOME/chromium-fetch if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/chromium-fetch,
/// or ./chromium-fetch if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default extraction directory.
pub fn default_output_dir() -> PathBuf {
    data_dir().join("chromium")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("chromium-fetch")
}
