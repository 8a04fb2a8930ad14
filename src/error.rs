use std::path::PathBuf;

use thiserror::Error;

/// Failure of one of the install pipeline stages
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Unsupported platform: {os} ({arch})")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Failed to retrieve the version catalog: {0}")]
    Fetch(String),

    #[error(
        "Could not find a Chromium build with major version {major}. Only recent builds are available for download"
    )]
    NoMatchingRevision { major: u64 },

    #[error("Failed to create temporary file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to download Chromium archive: {0}")]
    Download(String),

    #[error("Failed to save Chromium archive to disk: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to extract archive: {0}")]
    Extraction(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("No version field in {0}")]
    MissingVersion(PathBuf),
}
