/// Storage-specific errors
use thiserror::Error;

/// Storage error types
///
/// These cover opening and migrating the database. Per-query failures are
/// reported as `longbox_core::CatalogError::Storage`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for longbox_core::CatalogError {
    fn from(err: StorageError) -> Self {
        longbox_core::CatalogError::storage(err.to_string())
    }
}
