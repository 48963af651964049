use somabuddy::app;
use somabuddy::error::SomabuddyError;
use somabuddy::logger::{initialize as LoggerInitialize, level_filter};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;

use log::info;
use reading_core::config::config_dir;

#[tokio::main]
async fn main() -> Result<(), SomabuddyError> {
    // A missing .env file is fine
    let dotenv_path = dotenvy::dotenv().ok();

    let config_dir = config_dir();
    let config = app::load_config(&config_dir)?;

    let log_dir = app::log_dir(&config_dir, &config);
    create_dir_all(&log_dir).map_err(|e| SomabuddyError::Somabuddy {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&log_dir, level_filter(config.logging.level))?;

    info!("SomaBuddy server starting");
    info!("Config directory: {}", config_dir.display());
    info!("Log directory: {}", log_dir.display());
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    app::run(config).await
}
