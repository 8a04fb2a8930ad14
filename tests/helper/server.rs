//! Mock catalog and CDN endpoints

use std::path::Path;

use chromium_fetch::config::InstallerConfig;
use mockito::{Matcher, Mock, ServerGuard};

/// Catalog JSON with a single OS section
pub fn catalog_body(os: &str, versions: &[(&str, u64)]) -> String {
    let versions: Vec<serde_json::Value> = versions
        .iter()
        .map(|(version, position)| {
            serde_json::json!({ "version": version, "branch_base_position": position })
        })
        .collect();

    serde_json::json!([{ "os": os, "versions": versions }]).to_string()
}

/// Serve `body` as the version catalog at `/all.json`
pub async fn mock_catalog(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", "/all.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Serve `body` as the snapshot object for `prefix`/`revision`/`folder`.zip
pub async fn mock_archive(
    server: &mut ServerGuard,
    prefix: &str,
    revision: &str,
    folder: &str,
    status: usize,
    body: Vec<u8>,
) -> Mock {
    server
        .mock(
            "GET",
            format!("/o/{}%2F{}%2F{}.zip", prefix, revision, folder).as_str(),
        )
        .match_query(Matcher::UrlEncoded("alt".into(), "media".into()))
        .with_status(status)
        .with_header("content-type", "application/zip")
        .with_body(body)
        .create_async()
        .await
}

/// Configuration pointing at the mock server and a scratch directory
pub fn test_config(server_url: &str, scratch: &Path) -> InstallerConfig {
    InstallerConfig {
        catalog_url: format!("{}/all.json", server_url),
        cdn_url: format!("{}/o", server_url),
        output_dir: Some(scratch.join("lib/chromium")),
        temp_dir: Some(scratch.join("tmp")),
        ..InstallerConfig::default()
    }
}
