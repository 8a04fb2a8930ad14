//! Trait for opening a snapshot archive stream

use std::pin::Pin;

use futures::Stream;

use crate::catalog::types::Revision;
use crate::error::InstallError;
use crate::platform::Platform;

/// Archive body, delivered chunk by chunk
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, InstallError>> + Send>>;

#[async_trait::async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Starts retrieving the archive for `revision` on `platform`
    ///
    /// Errors raised before the first byte and errors raised mid-stream are
    /// both reported as `InstallError::Download`.
    async fn open(
        &self,
        platform: &Platform,
        revision: &Revision,
    ) -> Result<ChunkStream, InstallError>;
}
