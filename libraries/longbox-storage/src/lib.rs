//! Longbox Storage
//!
//! `SQLite` database layer for the Longbox comic catalog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `artists`, `series` and `issues` each own their queries
//! - **Integrity in SQL**: the series delete guard is a single conditional statement
//! - **Write-then-read**: every write re-fetches its row inside the same transaction
//!
//! # Example
//!
//! ```rust,no_run
//! use longbox_storage::{PoolSettings, SqliteCatalog};
//! use longbox_core::storage::CatalogStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = SqliteCatalog::open("sqlite://longbox.db", &PoolSettings::default()).await?;
//!
//! let artists = catalog.list_employed_artists().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod record;

// Vertical slices
pub mod artists;
pub mod issues;
pub mod series;

pub use context::SqliteCatalog;
pub use error::StorageError;
pub use record::{find_by_id, Record};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use std::time::Duration;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool tuning
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// How long a statement waits on a locked database before failing
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Catalog schema is up to date");
    Ok(())
}

/// Drop every catalog table and rebuild an empty schema
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    let mut tx = pool.begin().await?;

    // Issue first: it references the other two
    for table in ["Issue", "Series", "Artist", "_sqlx_migrations"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::warn!("Dropped all catalog tables");

    run_migrations(pool).await
}

/// Create a new `SQLite` pool
///
/// The database file is created if missing, along with its parent directory.
pub async fn create_pool(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(format!("{database_url}: {e}")))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(settings.busy_timeout);

    if let Some(dir) = options.get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| {
                StorageError::Connection(format!("{}: {e}", dir.display()))
            })?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(format!("{database_url}: {e}")))?;

    tracing::debug!(
        max_connections = settings.max_connections,
        "Pool created successfully"
    );

    Ok(pool)
}
