/// Shared application state
use longbox_storage::SqliteCatalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SqliteCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<SqliteCatalog>) -> Self {
        Self { catalog }
    }
}
