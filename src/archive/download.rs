//! Streaming download into a scoped temporary file

use std::path::Path;

use futures::StreamExt;
use tempfile::NamedTempFile;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::archive::source::{ArchiveSource, ChunkStream};
use crate::catalog::types::Revision;
use crate::error::InstallError;
use crate::platform::Platform;

/// Emit a progress line every 8MB
const PROGRESS_THRESHOLD: u64 = 8 * 1024 * 1024;

/// Download the archive for `revision` into a fresh temporary file.
///
/// The file is created before the request is sent. It is deleted when the
/// returned handle is dropped, and on every error path.
pub async fn download_to_temp(
    source: &dyn ArchiveSource,
    platform: &Platform,
    revision: &Revision,
    temp_dir: Option<&Path>,
) -> Result<NamedTempFile, InstallError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("chromium-").suffix(".zip");
    let archive = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(InstallError::TempFile)?;
    debug!("Created temporary archive {:?}", archive.path());

    let handle = archive.as_file().try_clone().map_err(InstallError::TempFile)?;
    let mut file = tokio::fs::File::from_std(handle);

    let stream = source.open(platform, revision).await?;
    let downloaded = write_chunks(stream, &mut file).await?;
    file.sync_all().await.map_err(InstallError::Write)?;

    info!("Downloaded {} bytes to {:?}", downloaded, archive.path());

    Ok(archive)
}

/// Drain `stream` into `writer`, returning the number of bytes written
///
/// # Returns
/// * `Err(InstallError::Download)` - The stream yielded an error
/// * `Err(InstallError::Write)` - The writer rejected a chunk or the final flush
pub async fn write_chunks<W>(mut stream: ChunkStream, writer: &mut W) -> Result<u64, InstallError>
where
    W: AsyncWrite + Unpin,
{
    let mut downloaded: u64 = 0;
    let mut last_progress: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;

        writer.write_all(&chunk).await.map_err(InstallError::Write)?;
        downloaded += chunk.len() as u64;

        if downloaded - last_progress >= PROGRESS_THRESHOLD {
            debug!("Downloaded {} bytes", downloaded);
            last_progress = downloaded;
        }
    }

    writer.flush().await.map_err(InstallError::Write)?;

    Ok(downloaded)
}
