//! Version catalog layer
//!
//! Maps a target major version onto a Chromium snapshot revision.
//!
//! # Modules
//!
//! - [`types`]: Catalog document model and the resolved revision
//! - [`source`]: `VersionCatalog` trait for fetching the catalog
//! - [`omaha`]: HTTP implementation backed by the OmahaProxy JSON feed
//! - [`resolver`]: First-match lookup of a revision for a host and major version

pub mod omaha;
pub mod resolver;
pub mod source;
pub mod types;

pub use omaha::OmahaCatalog;
pub use resolver::resolve_revision;
pub use source::VersionCatalog;
pub use types::{BranchPosition, CatalogPlatform, CatalogVersion, ResolvedBuild, Revision};
