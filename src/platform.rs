//! Host platform description
//!
//! Maps the host OS and architecture onto the path segments used by the
//! Chromium snapshot CDN and the OS tags used by the version catalog.

use std::path::{Path, PathBuf};

use crate::error::InstallError;

/// Operating system family supported by the snapshot CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Windows,
    Mac,
}

/// Host platform, computed once and passed to every pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    os: Os,
    is_x64: bool,
}

impl Platform {
    pub fn new(os: Os, is_x64: bool) -> Self {
        Self { os, is_x64 }
    }

    /// Describe the platform this binary was compiled for
    pub fn detect() -> Result<Self, InstallError> {
        Self::from_host(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Build a platform from OS and architecture identifiers.
    ///
    /// Accepts both Rust (`linux`, `windows`, `macos`, `x86_64`) and Node
    /// style (`win32`, `darwin`, `x64`) identifiers.
    pub fn from_host(os: &str, arch: &str) -> Result<Self, InstallError> {
        let is_x64 = matches!(arch, "x86_64" | "x64");
        let os = match os {
            "linux" => Os::Linux,
            "windows" | "win32" => Os::Windows,
            "macos" | "darwin" => Os::Mac,
            _ => {
                return Err(InstallError::UnsupportedPlatform {
                    os: os.to_string(),
                    arch: arch.to_string(),
                });
            }
        };

        Ok(Self { os, is_x64 })
    }

    pub fn os(&self) -> Os {
        self.os
    }

    pub fn is_x64(&self) -> bool {
        self.is_x64
    }

    /// CDN object prefix, e.g. `Linux_x64` or `Mac`
    pub fn cdn_prefix(&self) -> &'static str {
        match (self.os, self.is_x64) {
            (Os::Linux, true) => "Linux_x64",
            (Os::Linux, false) => "Linux",
            (Os::Windows, true) => "Win_x64",
            (Os::Windows, false) => "Win",
            (Os::Mac, _) => "Mac",
        }
    }

    /// OS tag used by the version catalog
    pub fn os_tag(&self) -> &'static str {
        match self.os {
            Os::Linux => "linux",
            Os::Windows => "win",
            Os::Mac => "mac",
        }
    }

    /// Top-level folder inside the snapshot archive
    pub fn archive_folder(&self) -> &'static str {
        match self.os {
            Os::Linux => "chrome-linux",
            Os::Windows => "chrome-win",
            Os::Mac => "chrome-mac",
        }
    }

    /// Location of the browser executable once the archive is extracted into `output_dir`
    pub fn executable_path(&self, output_dir: &Path) -> PathBuf {
        let folder = output_dir.join(self.archive_folder());
        match self.os {
            Os::Linux => folder.join("chrome"),
            Os::Windows => folder.join("chrome.exe"),
            Os::Mac => folder.join("Chromium.app/Contents/MacOS/Chromium"),
        }
    }
}
