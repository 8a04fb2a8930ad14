//! Shared utilities for end-to-end tests

mod archive;
mod server;

pub use archive::build_zip;
pub use server::{catalog_body, mock_archive, mock_catalog, test_config};
