//! Start-up wiring: config, catalog, log directory and the server lifecycle.

use crate::error::SomabuddyError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use reading_core::{AppConfig, InMemoryCatalog, ServerHandle, SharedCatalog, start_server};

const LOG_DIR_NAME: &str = "logs";

/// Load `config.json` from `config_dir` and apply environment overrides.
pub fn load_config(config_dir: &Path) -> Result<AppConfig, SomabuddyError> {
    let mut config = AppConfig::load(config_dir)?;
    config.apply_env_overrides();
    Ok(config)
}

/// Where log files go: the configured directory, else `<config_dir>/logs`.
pub fn log_dir(config_dir: &Path, config: &AppConfig) -> PathBuf {
    config
        .logging
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join(LOG_DIR_NAME))
}

/// Build the book catalog from the configured file, or the built-in samples.
pub fn build_catalog(config: &AppConfig) -> Result<SharedCatalog, SomabuddyError> {
    let catalog = match &config.storage.books_file {
        Some(path) => InMemoryCatalog::load_json(path)?,
        None => {
            info!("No books file configured, using sample books");
            InMemoryCatalog::with_samples()
        }
    };

    if catalog.is_empty() {
        warn!("Book catalog is empty");
    }

    Ok(catalog.into_shared())
}

/// Start the HTTP server.
pub async fn start(config: &AppConfig) -> Result<ServerHandle, SomabuddyError> {
    let catalog = build_catalog(config)?;
    let handle = start_server(config, catalog).await?;
    Ok(handle)
}

/// Run until Ctrl-C, then shut down gracefully.
pub async fn run(config: AppConfig) -> Result<(), SomabuddyError> {
    let handle = start(&config).await?;

    info!("Serving on {}", handle.base_url());
    info!("\"Dyslexia is no disorder, dyslexics think differently.\"");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| SomabuddyError::Somabuddy {
            message: format!("Failed to listen for shutdown signal: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Shutdown signal received");
    handle.shutdown().await?;
    Ok(())
}
