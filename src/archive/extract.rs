//! Zip archive extraction

use std::fs::File;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::error::InstallError;

/// Unpacks a downloaded archive into a destination directory
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ArchiveExtractor: Send + Sync {
    /// Extracts every entry of `archive` below `destination`, creating it when absent
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of files written
    /// * `Err(InstallError::Extraction)` - Corrupt archive, I/O or permission failure
    async fn extract(&self, archive: &Path, destination: &Path) -> Result<usize, InstallError>;
}

/// Extractor for `.zip` archives
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipExtractor;

#[async_trait::async_trait]
impl ArchiveExtractor for ZipExtractor {
    async fn extract(&self, archive: &Path, destination: &Path) -> Result<usize, InstallError> {
        info!("Started extracting archive {:?}", archive);

        let archive = archive.to_path_buf();
        let destination = destination.to_path_buf();

        // Zip decoding is CPU-bound and uses blocking file I/O
        let written = tokio::task::spawn_blocking(move || unzip(&archive, &destination))
            .await
            .map_err(|e| InstallError::Extraction(e.to_string()))??;

        info!("Archive was successfully extracted ({} files)", written);
        Ok(written)
    }
}

fn unzip(archive_path: &Path, destination: &Path) -> Result<usize, InstallError> {
    let file = File::open(archive_path).map_err(|e| extraction(archive_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| extraction(archive_path, e))?;

    std::fs::create_dir_all(destination).map_err(|e| extraction(destination, e))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| extraction(archive_path, e))?;

        let outpath: PathBuf = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => {
                warn!("Skipping archive entry outside destination: {}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath).map_err(|e| extraction(&outpath, e))?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent).map_err(|e| extraction(parent, e))?;
        }

        // App bundles in the Mac snapshot rely on symlinks such as Versions/Current -> A
        #[cfg(unix)]
        if entry.unix_mode().is_some_and(is_symlink_mode) {
            let mut target = String::new();
            std::io::Read::read_to_string(&mut entry, &mut target)
                .map_err(|e| extraction(&outpath, e))?;
            if outpath.symlink_metadata().is_ok() {
                std::fs::remove_file(&outpath).map_err(|e| extraction(&outpath, e))?;
            }
            std::os::unix::fs::symlink(&target, &outpath).map_err(|e| extraction(&outpath, e))?;
            written += 1;
            debug!("Linked {:?} -> {}", outpath, target);
            continue;
        }

        let mut outfile = File::create(&outpath).map_err(|e| extraction(&outpath, e))?;
        std::io::copy(&mut entry, &mut outfile).map_err(|e| extraction(&outpath, e))?;
        written += 1;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))
                    .map_err(|e| extraction(&outpath, e))?;
            }
        }

        debug!("Extracted {:?}", outpath);
    }

    Ok(written)
}

#[cfg(unix)]
fn is_symlink_mode(mode: u32) -> bool {
    mode & 0o170000 == 0o120000
}

fn extraction(path: &Path, error: impl std::fmt::Display) -> InstallError {
    InstallError::Extraction(format!("{}: {}", path.display(), error))
}
