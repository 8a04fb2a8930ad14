//! Fetches the Chromium snapshot build matching a package's major version.
//!
//! # Modules
//!
//! - [`platform`]: Host OS/architecture mapping to CDN and catalog names
//! - [`catalog`]: Version catalog fetching and revision lookup
//! - [`archive`]: Archive download into a temporary file and zip extraction
//! - [`installer`]: Sequential pipeline composing the stages above
//! - [`config`]: Installer configuration and default paths
//! - [`version`]: Target version parsing
//! - [`error`]: Error types
//! - [`logging`]: Tracing subscriber setup

pub mod archive;
pub mod catalog;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod platform;
pub mod version;
