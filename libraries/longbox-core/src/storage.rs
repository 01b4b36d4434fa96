//! Storage trait for the catalog

use crate::error::Result;
use crate::types::{
    Artist, ArtistDraft, ArtistId, Issue, IssueDraft, IssueId, Series, SeriesDraft, SeriesId,
};
use async_trait::async_trait;

/// Typed catalog operations with the referential-integrity rules built in
///
/// Implementations own the SQL. Callers hand over unvalidated drafts and get
/// back the row as stored, so every write answers with what a subsequent
/// read would see.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Artists
    // ========================================================================

    /// Artists still employed; retired ones are left out
    async fn list_employed_artists(&self) -> Result<Vec<Artist>>;

    /// Get artist by ID, employed or not
    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>>;

    async fn create_artist(&self, draft: ArtistDraft) -> Result<Artist>;

    /// Replace all mutable fields of an artist
    async fn update_artist(&self, id: ArtistId, draft: ArtistDraft) -> Result<Artist>;

    /// Mark an artist as no longer employed. Idempotent.
    async fn retire_artist(&self, id: ArtistId) -> Result<Artist>;

    // ========================================================================
    // Series
    // ========================================================================

    async fn list_series(&self) -> Result<Vec<Series>>;

    async fn get_series(&self, id: SeriesId) -> Result<Option<Series>>;

    async fn create_series(&self, draft: SeriesDraft) -> Result<Series>;

    async fn update_series(&self, id: SeriesId, draft: SeriesDraft) -> Result<Series>;

    /// Delete a series that no issue references
    ///
    /// Fails with `CatalogError::Conflict` and leaves everything untouched
    /// while at least one issue still points at the series.
    async fn delete_series(&self, id: SeriesId) -> Result<()>;

    // ========================================================================
    // Issues
    // ========================================================================

    async fn list_issues(&self, series_id: SeriesId) -> Result<Vec<Issue>>;

    async fn get_issue(&self, id: IssueId) -> Result<Option<Issue>>;

    /// Create an issue under `series_id`
    ///
    /// `draft.artist_id` must name an existing artist; retired artists count.
    async fn create_issue(&self, series_id: SeriesId, draft: IssueDraft) -> Result<Issue>;

    async fn update_issue(
        &self,
        series_id: SeriesId,
        id: IssueId,
        draft: IssueDraft,
    ) -> Result<Issue>;

    async fn delete_issue(&self, id: IssueId) -> Result<()>;
}
