//! Version parsing for the install target and catalog entries

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use semver::Version;
use serde::Deserialize;

use crate::error::ConfigError;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Examples:
/// - "90" -> Version(90, 0, 0)
/// - "90.1" -> Version(90, 1, 0)
/// - "90.1.2" -> Version(90, 1, 2)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim().trim_start_matches('v');
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Leading dot-delimited segment of a catalog version, e.g. 90 for "90.0.4430.212".
///
/// Catalog versions have four components and are not valid semver, so only
/// the first segment is interpreted.
pub fn major_of(version: &str) -> Option<u64> {
    version.split('.').next()?.trim().parse().ok()
}

/// The package version whose major component selects a Chromium build.
///
/// Accepts semver (`90.3.1`), partial versions (`90`) and four-part Chromium
/// versions (`90.0.4430.212`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion {
    raw: String,
    major: u64,
}

impl TargetVersion {
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Read the `version` field of an npm-style manifest
    pub fn from_manifest(path: &Path) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct Manifest {
            version: Option<String>,
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        manifest
            .version
            .ok_or_else(|| ConfigError::MissingVersion(path.to_path_buf()))?
            .parse()
    }
}

impl FromStr for TargetVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let major = parse_version(s)
            .map(|version| version.major)
            .or_else(|| major_of(s.trim().trim_start_matches('v')))
            .ok_or_else(|| ConfigError::InvalidVersion(s.to_string()))?;

        Ok(Self {
            raw: s.trim().to_string(),
            major,
        })
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case("90", Some(90))]
    #[case("90.1", Some(90))]
    #[case("90.0.4430", Some(90))]
    #[case("v91.2.3", Some(91))]
    #[case("92.0.0-beta.1", Some(92))]
    #[case("not-a-version", None)]
    #[case("", None)]
    fn parse_version_normalizes_partial_versions(#[case] input: &str, #[case] major: Option<u64>) {
        assert_eq!(parse_version(input).map(|v| v.major), major);
    }

    #[rstest]
    #[case("90.0.4430.212", Some(90))]
    #[case("9", Some(9))]
    #[case("canary.1", None)]
    #[case("", None)]
    fn major_of_reads_leading_segment(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(major_of(input), expected);
    }

    #[rstest]
    #[case("90", 90)]
    #[case("90.3.1", 90)]
    #[case("90.0.4430.212", 90)]
    #[case("v91.0.4472.77", 91)]
    fn target_version_reads_major(#[case] input: &str, #[case] major: u64) {
        let version: TargetVersion = input.parse().unwrap();

        assert_eq!(version.major(), major);
        assert_eq!(version.to_string(), input);
    }

    #[rstest]
    #[case("latest")]
    #[case("")]
    #[case("x.0.4430.212")]
    fn target_version_rejects_garbage(#[case] input: &str) {
        let result = input.parse::<TargetVersion>();

        assert!(matches!(result, Err(ConfigError::InvalidVersion(v)) if v == input));
    }

    #[test]
    fn from_manifest_reads_version_field() {
        let mut manifest = tempfile::NamedTempFile::new().unwrap();
        write!(manifest, r#"{{"name": "chromium", "version": "90.3.1"}}"#).unwrap();

        let version = TargetVersion::from_manifest(manifest.path()).unwrap();

        assert_eq!(version.major(), 90);
        assert_eq!(version.to_string(), "90.3.1");
    }

    #[test]
    fn from_manifest_without_version_fails() {
        let mut manifest = tempfile::NamedTempFile::new().unwrap();
        write!(manifest, r#"{{"name": "chromium"}}"#).unwrap();

        let result = TargetVersion::from_manifest(manifest.path());

        assert!(matches!(result, Err(ConfigError::MissingVersion(_))));
    }

    #[test]
    fn from_manifest_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = TargetVersion::from_manifest(&dir.path().join("package.json"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
