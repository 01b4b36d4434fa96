//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so every pooled connection sees the same schema and rows.

#![allow(dead_code)]

use longbox_core::types::*;
use longbox_storage::{PoolSettings, SqliteCatalog};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub catalog: SqliteCatalog,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let catalog = SqliteCatalog::open(&db_url, &PoolSettings::default())
            .await
            .expect("Failed to open catalog");

        Self {
            catalog,
            _temp_dir: temp_dir,
        }
    }

    pub fn catalog(&self) -> &SqliteCatalog {
        &self.catalog
    }

    pub fn pool(&self) -> &SqlitePool {
        self.catalog.pool()
    }
}

pub fn artist_draft(name: &str) -> ArtistDraft {
    ArtistDraft {
        name: Some(name.to_string()),
        date_of_birth: Some("1950-01-01".to_string()),
        biography: Some(format!("{name} draws comics")),
        is_currently_employed: None,
    }
}

pub fn series_draft(name: &str) -> SeriesDraft {
    SeriesDraft {
        name: Some(name.to_string()),
        description: Some(format!("All about {name}")),
    }
}

pub fn issue_draft(name: &str, artist_id: ArtistId) -> IssueDraft {
    IssueDraft {
        name: Some(name.to_string()),
        issue_number: Some(1),
        publication_date: Some("1963-03-01".to_string()),
        artist_id: Some(artist_id),
    }
}

/// Count rows in a table, bypassing the catalog API
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
