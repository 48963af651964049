use crate::api::handle::ServerHandle;
use crate::api::handlers;
use crate::api::state::AppState;
use crate::api::{
    BOOK_BY_ID_PATH, BOOKS_PATH, HEALTH_PATH, PROCESS_TEXT_PATH, SPEECH_FEEDBACK_PATH, TTS_PATH,
    UPLOAD_PATH,
};
use crate::catalog::SharedCatalog;
use crate::config::AppConfig;
use crate::error::ServerError;
use crate::upload::UploadStore;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use log::{error, info};
use tokio::net::TcpListener;
use tokio::spawn as TokioSpawn;
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the application router.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let body_limit = state
        .uploads
        .max_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route(HEALTH_PATH, get(handlers::health))
        .route(BOOKS_PATH, get(handlers::list_books))
        .route(BOOK_BY_ID_PATH, get(handlers::get_book))
        .route(UPLOAD_PATH, post(handlers::upload))
        .route(PROCESS_TEXT_PATH, post(handlers::process_text))
        .route(TTS_PATH, post(handlers::tts))
        .route(SPEECH_FEEDBACK_PATH, post(handlers::speech_feedback))
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve the API in a background task.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is invalid or in use.
pub async fn start_server(
    config: &AppConfig,
    catalog: SharedCatalog,
) -> Result<ServerHandle, ServerError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::Bind {
            address: address.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let local_addr = listener.local_addr()?;

    let uploads = UploadStore::new(
        config.storage.upload_dir.clone(),
        config.storage.max_upload_bytes,
    );
    let app = router(AppState::new(catalog, uploads), &config.server.static_dir);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    info!("SomaBuddy server listening on http://{local_addr}");

    let task = TokioSpawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await;

        match result {
            Ok(()) => {
                info!("Server on {local_addr} stopped");
                Ok(())
            }
            Err(e) => {
                error!("Server on {local_addr} failed: {e}");
                Err(ServerError::from(e))
            }
        }
    });

    Ok(ServerHandle {
        local_addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
