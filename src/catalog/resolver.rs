//! Revision lookup for a host OS and target major version

use tracing::{debug, info};

use crate::catalog::types::{CatalogPlatform, ResolvedBuild};
use crate::error::InstallError;
use crate::version::major_of;

/// Find the first catalog entry for `os_tag` whose major version equals `major`.
///
/// Sections and versions are scanned in document order and the first match
/// wins, even when a later entry with the same major has a higher minor or
/// patch. Entries without a usable branch position are skipped.
pub fn resolve_revision(
    platforms: &[CatalogPlatform],
    os_tag: &str,
    major: u64,
) -> Result<ResolvedBuild, InstallError> {
    let found = platforms
        .iter()
        .filter(|platform| platform.os == os_tag)
        .flat_map(|platform| platform.versions.iter())
        .filter(|entry| major_of(&entry.version) == Some(major))
        .find_map(|entry| {
            let revision = entry
                .branch_base_position
                .as_ref()
                .and_then(|position| position.to_revision());
            if revision.is_none() {
                debug!("Skipping {} without branch position", entry.version);
            }
            revision.map(|revision| ResolvedBuild {
                version: entry.version.clone(),
                revision,
            })
        });

    match found {
        Some(build) => {
            info!(
                "Found Chromium version {} with build number {}.",
                build.version, build.revision
            );
            Ok(build)
        }
        None => Err(InstallError::NoMatchingRevision { major }),
    }
}
