//! OmahaProxy JSON feed implementation

use tracing::debug;

use crate::catalog::source::VersionCatalog;
use crate::catalog::types::CatalogPlatform;
use crate::error::InstallError;

/// Default URL of the OmahaProxy release feed
pub const DEFAULT_CATALOG_URL: &str = "https://omahaproxy.appspot.com/all.json";

/// Catalog implementation for the OmahaProxy `all.json` feed
pub struct OmahaCatalog {
    client: reqwest::Client,
    url: String,
}

impl OmahaCatalog {
    pub fn new(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl VersionCatalog for OmahaCatalog {
    async fn fetch_platforms(&self) -> Result<Vec<CatalogPlatform>, InstallError> {
        debug!("Fetching version catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| InstallError::Fetch(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            debug!("Version catalog returned status {}: {}", status, self.url);
            return Err(InstallError::Fetch(format!("Unexpected status: {}", status)));
        }

        response
            .json::<Vec<CatalogPlatform>>()
            .await
            .map_err(|e| InstallError::Fetch(e.to_string()))
    }
}
