//! Catalog document model

use std::fmt;

use serde::Deserialize;

/// One OS section of the catalog
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogPlatform {
    pub os: String,
    #[serde(default)]
    pub versions: Vec<CatalogVersion>,
}

/// A release listed under an OS section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogVersion {
    pub version: String,
    #[serde(default)]
    pub branch_base_position: Option<BranchPosition>,
}

/// The feed reports positions either as numbers or as numeric strings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BranchPosition {
    Number(u64),
    Text(String),
}

impl BranchPosition {
    /// Convert into a revision, or None when the position is blank
    pub fn to_revision(&self) -> Option<Revision> {
        match self {
            BranchPosition::Number(n) => Some(Revision(n.to_string())),
            BranchPosition::Text(s) if s.trim().is_empty() => None,
            BranchPosition::Text(s) => Some(Revision(s.trim().to_string())),
        }
    }
}

/// CDN build identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(revision: impl Into<String>) -> Self {
        Self(revision.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry selected for the install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBuild {
    pub version: String,
    pub revision: Revision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_platform_accepts_numeric_and_string_positions() {
        let platforms: Vec<CatalogPlatform> = serde_json::from_value(json!([
            {
                "os": "linux",
                "versions": [
                    { "version": "90.0.4430.212", "branch_base_position": 857950 },
                    { "version": "91.0.4472.77", "branch_base_position": "870763" }
                ]
            }
        ]))
        .unwrap();

        let revisions: Vec<Option<Revision>> = platforms[0]
            .versions
            .iter()
            .map(|v| v.branch_base_position.as_ref().and_then(|p| p.to_revision()))
            .collect();

        assert_eq!(
            revisions,
            vec![Some(Revision::new("857950")), Some(Revision::new("870763"))]
        );
    }

    #[test]
    fn catalog_platform_tolerates_extra_and_missing_fields() {
        let platforms: Vec<CatalogPlatform> = serde_json::from_value(json!([
            { "os": "android" },
            {
                "os": "mac",
                "versions": [
                    { "version": "90.0.1.1", "channel": "stable", "current_reldate": "05/10/21" }
                ]
            }
        ]))
        .unwrap();

        assert!(platforms[0].versions.is_empty());
        assert_eq!(platforms[1].versions[0].branch_base_position, None);
    }

    #[test]
    fn blank_text_position_has_no_revision() {
        assert_eq!(BranchPosition::Text("  ".to_string()).to_revision(), None);
    }
}
