//! Handle to a running HTTP server.

use crate::error::ServerError;

use common::ErrorLocation;

use std::net::SocketAddr;
use std::panic::Location;

use log::info;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Handle returned by [`start_server`](crate::api::start_server).
///
/// Dropping the handle triggers a graceful shutdown, so keep it alive for
/// as long as the server should run.
pub struct ServerHandle {
    pub(crate) local_addr: SocketAddr,
    pub(crate) shutdown_tx: Option<oneshot::Sender<()>>,
    pub(crate) task: JoinHandle<Result<(), ServerError>>,
}

impl ServerHandle {
    /// Address the listener actually bound (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown_tx.take() {
            info!("Shutting down server on {}", self.local_addr);
            let _ = tx.send(());
        }
        self.wait().await
    }

    /// Wait until the server task finishes.
    pub async fn wait(mut self) -> Result<(), ServerError> {
        let task = &mut self.task;
        match task.await {
            Ok(result) => result,
            Err(e) => Err(ServerError::Serve {
                message: format!("Server task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
