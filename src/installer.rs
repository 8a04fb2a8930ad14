//! Install pipeline: resolve → download → extract
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────▶│  Download   │────▶│   Extract   │
//! │  (revision) │     │ (temp file) │     │ (output dir)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Each stage returns `Result<_, InstallError>` and the first failure ends the
//! run. Failures are logged once, by [`Installer::run`].

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::archive::cdn::CdnArchiveSource;
use crate::archive::download::download_to_temp;
use crate::archive::extract::{ArchiveExtractor, ZipExtractor};
use crate::archive::source::ArchiveSource;
use crate::catalog::omaha::OmahaCatalog;
use crate::catalog::resolver::resolve_revision;
use crate::catalog::source::VersionCatalog;
use crate::catalog::types::{ResolvedBuild, Revision};
use crate::config::InstallerConfig;
use crate::error::InstallError;
use crate::platform::Platform;
use crate::version::TargetVersion;

/// Result of a completed install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub version: String,
    pub revision: Revision,
    pub output_dir: PathBuf,
    pub executable: PathBuf,
}

/// Groups the catalog, archive source and extractor used for one install.
pub struct Installer {
    platform: Platform,
    catalog: Arc<dyn VersionCatalog>,
    source: Arc<dyn ArchiveSource>,
    extractor: Arc<dyn ArchiveExtractor>,
    output_dir: PathBuf,
    temp_dir: Option<PathBuf>,
}

impl Installer {
    /// Create a new Installer with the given components
    pub fn new(
        platform: Platform,
        catalog: Arc<dyn VersionCatalog>,
        source: Arc<dyn ArchiveSource>,
        extractor: Arc<dyn ArchiveExtractor>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            platform,
            catalog,
            source,
            extractor,
            output_dir,
            temp_dir: None,
        }
    }

    /// Build an installer talking to the configured catalog and CDN over HTTP
    pub fn from_config(config: &InstallerConfig, platform: Platform) -> Result<Self, InstallError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("chromium-fetch/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .build()
            .map_err(|e| InstallError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        let mut installer = Self::new(
            platform,
            Arc::new(OmahaCatalog::new(client.clone(), &config.catalog_url)),
            Arc::new(CdnArchiveSource::new(client, &config.cdn_url)),
            Arc::new(ZipExtractor),
            config.output_dir(),
        );
        installer.temp_dir = config.temp_dir.clone();
        Ok(installer)
    }

    /// Set the directory that receives the temporary archive
    pub fn with_temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.temp_dir = Some(temp_dir);
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Look up the catalog entry for the target's major version on this platform
    pub async fn resolve(&self, target: &TargetVersion) -> Result<ResolvedBuild, InstallError> {
        let platforms = self.catalog.fetch_platforms().await?;
        resolve_revision(&platforms, self.platform.os_tag(), target.major())
    }

    /// Run every stage and return the outcome without logging failures
    pub async fn install(&self, target: &TargetVersion) -> Result<InstallOutcome, InstallError> {
        let build = self.resolve(target).await?;

        let archive = download_to_temp(
            self.source.as_ref(),
            &self.platform,
            &build.revision,
            self.temp_dir.as_deref(),
        )
        .await?;

        self.extractor
            .extract(archive.path(), &self.output_dir)
            .await?;

        if let Err(e) = archive.close() {
            warn!("Failed to remove temporary archive: {}", e);
        }

        let executable = self.platform.executable_path(&self.output_dir);
        if !executable.exists() {
            warn!("Chromium executable not found at {:?}", executable);
        }

        Ok(InstallOutcome {
            version: build.version,
            revision: build.revision,
            output_dir: self.output_dir.clone(),
            executable,
        })
    }

    /// Install and log the failure, if any
    pub async fn run(&self, target: &TargetVersion) -> Result<InstallOutcome, InstallError> {
        info!(
            "Installing Chromium {} for {}",
            target.major(),
            self.platform.cdn_prefix()
        );

        self.install(target).await.inspect_err(|e| {
            error!(
                "An error occurred while trying to setup Chromium. Resolve all issues and restart the process: {}",
                e
            )
        })
    }
}
