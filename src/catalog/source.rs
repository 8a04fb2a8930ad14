//! Trait for fetching the version catalog

#[cfg(test)]
use mockall::automock;

use crate::catalog::types::CatalogPlatform;
use crate::error::InstallError;

/// Source of the platform → version → revision catalog
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionCatalog: Send + Sync {
    /// Fetches every OS section of the catalog in document order
    ///
    /// # Returns
    /// * `Ok(Vec<CatalogPlatform>)` - Catalog sections as listed by the remote document
    /// * `Err(InstallError::Fetch)` - If the request or the body parsing fails
    async fn fetch_platforms(&self) -> Result<Vec<CatalogPlatform>, InstallError>;
}
