use crate::record::{find_by_id, Record};
use crate::{artists, issues, series, PoolSettings, StorageError};
use async_trait::async_trait;
use longbox_core::{error::Result, storage::CatalogStore, types::*, CatalogError};
use sqlx::SqlitePool;

/// Catalog backed by a `SQLite` pool
///
/// The pool is injected rather than opened per call, so one `SqliteCatalog`
/// is shared by every request handler.
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and bring the schema up to date
    pub async fn open(
        database_url: &str,
        settings: &PoolSettings,
    ) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url, settings).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round trip to the database on a pooled connection
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Look up any catalog row by primary key
    pub async fn resolve<R: Record>(&self, id: i64) -> Result<Option<R>> {
        let mut conn = self.pool.acquire().await?;
        find_by_id::<R>(&mut conn, id).await
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    // Artists
    async fn list_employed_artists(&self) -> Result<Vec<Artist>> {
        artists::get_all_employed(&self.pool).await
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        artists::get_by_id(&self.pool, id).await
    }

    async fn create_artist(&self, draft: ArtistDraft) -> Result<Artist> {
        artists::create(&self.pool, draft.validate()?).await
    }

    async fn update_artist(&self, id: ArtistId, draft: ArtistDraft) -> Result<Artist> {
        artists::update(&self.pool, id, draft.validate()?).await
    }

    async fn retire_artist(&self, id: ArtistId) -> Result<Artist> {
        artists::retire(&self.pool, id).await
    }

    // Series
    async fn list_series(&self) -> Result<Vec<Series>> {
        series::get_all(&self.pool).await
    }

    async fn get_series(&self, id: SeriesId) -> Result<Option<Series>> {
        series::get_by_id(&self.pool, id).await
    }

    async fn create_series(&self, draft: SeriesDraft) -> Result<Series> {
        series::create(&self.pool, draft.validate()?).await
    }

    async fn update_series(&self, id: SeriesId, draft: SeriesDraft) -> Result<Series> {
        series::update(&self.pool, id, draft.validate()?).await
    }

    async fn delete_series(&self, id: SeriesId) -> Result<()> {
        series::delete(&self.pool, id).await
    }

    // Issues
    async fn list_issues(&self, series_id: SeriesId) -> Result<Vec<Issue>> {
        issues::get_by_series(&self.pool, series_id).await
    }

    async fn get_issue(&self, id: IssueId) -> Result<Option<Issue>> {
        issues::get_by_id(&self.pool, id).await
    }

    async fn create_issue(&self, series_id: SeriesId, draft: IssueDraft) -> Result<Issue> {
        issues::create(&self.pool, series_id, draft).await
    }

    async fn update_issue(
        &self,
        series_id: SeriesId,
        id: IssueId,
        draft: IssueDraft,
    ) -> Result<Issue> {
        issues::update(&self.pool, series_id, id, draft).await
    }

    async fn delete_issue(&self, id: IssueId) -> Result<()> {
        if issues::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(CatalogError::not_found("Issue", id))
        }
    }
}
