//! Test helpers for HTTP API integration tests.
//!
//! - Starting a server on an ephemeral localhost port
//! - Isolated upload and static directories per test

use reading_core::config::AppConfig;
use reading_core::{InMemoryCatalog, ServerHandle, start_server};

use tempfile::TempDir;

/// A running server plus the directories it owns.
///
/// Dropping this stops the server and removes the directories.
pub struct TestServer {
    pub handle: ServerHandle,
    pub client: reqwest::Client,
    pub dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.handle.base_url(), path)
    }
}

/// Test helper: Start a server with the sample catalog.
pub async fn start_test_server() -> TestServer {
    start_test_server_with(|_| {}).await
}

/// Test helper: Start a server after adjusting its config.
pub async fn start_test_server_with(adjust: impl FnOnce(&mut AppConfig)) -> TestServer {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut config = AppConfig::default();
    config.server.host = String::from("127.0.0.1");
    config.server.port = 0;
    config.server.static_dir = dir.path().join("public");
    config.storage.upload_dir = dir.path().join("uploads");
    adjust(&mut config);

    let handle = start_server(&config, InMemoryCatalog::with_samples().into_shared())
        .await
        .expect("Failed to start server");

    TestServer {
        handle,
        client: reqwest::Client::new(),
        dir,
    }
}
