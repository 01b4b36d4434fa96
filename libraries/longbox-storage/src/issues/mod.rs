use crate::record::find_by_id;
use longbox_core::{error::Result, types::*, CatalogError};
use sqlx::{SqliteConnection, SqlitePool};

/// Issues belonging to one series
pub async fn get_by_series(pool: &SqlitePool, series_id: SeriesId) -> Result<Vec<Issue>> {
    let issues = sqlx::query_as::<_, Issue>(
        "SELECT id, name, issue_number, publication_date, artist_id, series_id
         FROM Issue
         WHERE series_id = ?",
    )
    .bind(series_id)
    .fetch_all(pool)
    .await?;

    Ok(issues)
}

pub async fn get_by_id(pool: &SqlitePool, id: IssueId) -> Result<Option<Issue>> {
    let mut conn = pool.acquire().await?;
    find_by_id::<Issue>(&mut conn, id).await
}

/// Validate a draft against the live artist table
///
/// The artist lookup runs first so a storage failure there surfaces as
/// such, ahead of any field complaints. It runs outside the write
/// transaction: a transaction that reads before it writes cannot take the
/// write lock once another connection has committed.
async fn check_draft(
    pool: &SqlitePool,
    series_id: SeriesId,
    draft: IssueDraft,
) -> Result<NewIssue> {
    let mut conn = pool.acquire().await?;
    let artist = match draft.artist_id {
        Some(artist_id) => find_by_id::<Artist>(&mut conn, artist_id).await?,
        None => None,
    };

    let issue = draft.validate(series_id)?;

    if artist.is_none() {
        return Err(unknown_artist(issue.artist_id));
    }

    Ok(issue)
}

fn unknown_artist(artist_id: ArtistId) -> CatalogError {
    CatalogError::validation(format!(
        "artistId {artist_id} does not reference an existing artist"
    ))
}

/// Work out which reference a guarded write found missing
///
/// Called after the write statement, so the transaction already holds the
/// write lock and sees a stable view.
async fn refused_write(
    conn: &mut SqliteConnection,
    issue: &NewIssue,
    id: Option<IssueId>,
) -> Result<CatalogError> {
    if find_by_id::<Series>(conn, issue.series_id).await?.is_none() {
        return Ok(CatalogError::not_found("Series", issue.series_id));
    }
    if let Some(id) = id {
        if find_by_id::<Issue>(conn, id).await?.is_none() {
            return Ok(CatalogError::not_found("Issue", id));
        }
    }
    Ok(unknown_artist(issue.artist_id))
}

pub async fn create(pool: &SqlitePool, series_id: SeriesId, draft: IssueDraft) -> Result<Issue> {
    let issue = check_draft(pool, series_id, draft).await?;

    let mut tx = pool.begin().await?;

    // Both references are re-checked by the insert itself, so a series
    // deleted since resolution refuses the write instead of tripping the FK
    let result = sqlx::query(
        "INSERT INTO Issue (name, issue_number, publication_date, artist_id, series_id)
         SELECT ?, ?, ?, ?, ?
         WHERE EXISTS (SELECT 1 FROM Artist WHERE id = ?)
           AND EXISTS (SELECT 1 FROM Series WHERE id = ?)",
    )
    .bind(&issue.name)
    .bind(issue.issue_number)
    .bind(&issue.publication_date)
    .bind(issue.artist_id)
    .bind(issue.series_id)
    .bind(issue.artist_id)
    .bind(issue.series_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(refused_write(&mut tx, &issue, None).await?);
    }

    let id = result.last_insert_rowid();
    let created = find_by_id::<Issue>(&mut tx, id)
        .await?
        .ok_or_else(|| CatalogError::storage("Failed to retrieve created issue"))?;

    tx.commit().await?;

    Ok(created)
}

/// Replace an issue's fields, binding it to `series_id`
pub async fn update(
    pool: &SqlitePool,
    series_id: SeriesId,
    id: IssueId,
    draft: IssueDraft,
) -> Result<Issue> {
    let issue = check_draft(pool, series_id, draft).await?;

    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE Issue
         SET name = ?, issue_number = ?, publication_date = ?, artist_id = ?, series_id = ?
         WHERE id = ?
           AND EXISTS (SELECT 1 FROM Artist WHERE id = ?)
           AND EXISTS (SELECT 1 FROM Series WHERE id = ?)",
    )
    .bind(&issue.name)
    .bind(issue.issue_number)
    .bind(&issue.publication_date)
    .bind(issue.artist_id)
    .bind(issue.series_id)
    .bind(id)
    .bind(issue.artist_id)
    .bind(issue.series_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(refused_write(&mut tx, &issue, Some(id)).await?);
    }

    let updated = find_by_id::<Issue>(&mut tx, id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Issue", id))?;

    tx.commit().await?;

    Ok(updated)
}

/// Hard delete. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: IssueId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM Issue WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
