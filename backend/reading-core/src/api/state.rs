use crate::catalog::SharedCatalog;
use crate::upload::UploadStore;

/// Dependencies shared by all request handlers.
///
/// Cloned per request; the catalog is behind an `Arc` and read-only.
#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(catalog: SharedCatalog, uploads: UploadStore) -> Self {
        Self { catalog, uploads }
    }
}
