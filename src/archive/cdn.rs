//! Chromium snapshot CDN implementation

use futures::TryStreamExt;
use tracing::{debug, info};

use crate::archive::source::{ArchiveSource, ChunkStream};
use crate::catalog::types::Revision;
use crate::error::InstallError;
use crate::platform::Platform;

/// Default base URL of the snapshot bucket objects
pub const DEFAULT_CDN_URL: &str =
    "https://www.googleapis.com/download/storage/v1/b/chromium-browser-snapshots/o";

/// Archive source for the Google Storage snapshot bucket
pub struct CdnArchiveSource {
    client: reqwest::Client,
    base_url: String,
}

impl CdnArchiveSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Object URL for a revision; the object name's slashes are encoded as `%2F`
    pub fn archive_url(&self, platform: &Platform, revision: &Revision) -> String {
        format!(
            "{}/{}%2F{}%2F{}.zip?alt=media",
            self.base_url,
            platform.cdn_prefix(),
            revision,
            platform.archive_folder()
        )
    }
}

#[async_trait::async_trait]
impl ArchiveSource for CdnArchiveSource {
    async fn open(
        &self,
        platform: &Platform,
        revision: &Revision,
    ) -> Result<ChunkStream, InstallError> {
        let url = self.archive_url(platform, revision);
        info!("Downloading Chromium {} from Google CDN", revision);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InstallError::Download(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            debug!("CDN returned status {}: {}", status, url);
            return Err(InstallError::Download(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let stream = response
            .bytes_stream()
            .map_ok(Vec::<u8>::from)
            .map_err(|e| InstallError::Download(e.to_string()));

        Ok(Box::pin(stream))
    }
}
