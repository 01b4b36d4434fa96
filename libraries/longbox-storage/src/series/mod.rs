use crate::record::find_by_id;
use longbox_core::{error::Result, types::*, CatalogError};
use sqlx::SqlitePool;

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Series>> {
    let series = sqlx::query_as::<_, Series>("SELECT id, name, description FROM Series")
        .fetch_all(pool)
        .await?;

    Ok(series)
}

pub async fn get_by_id(pool: &SqlitePool, id: SeriesId) -> Result<Option<Series>> {
    let mut conn = pool.acquire().await?;
    find_by_id::<Series>(&mut conn, id).await
}

pub async fn create(pool: &SqlitePool, series: NewSeries) -> Result<Series> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO Series (name, description) VALUES (?, ?)")
        .bind(&series.name)
        .bind(&series.description)
        .execute(&mut *tx)
        .await?;

    let id = result.last_insert_rowid();
    let created = find_by_id::<Series>(&mut tx, id)
        .await?
        .ok_or_else(|| CatalogError::storage("Failed to retrieve created series"))?;

    tx.commit().await?;

    Ok(created)
}

pub async fn update(pool: &SqlitePool, id: SeriesId, series: NewSeries) -> Result<Series> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("UPDATE Series SET name = ?, description = ? WHERE id = ?")
        .bind(&series.name)
        .bind(&series.description)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found("Series", id));
    }

    let updated = find_by_id::<Series>(&mut tx, id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Series", id))?;

    tx.commit().await?;

    Ok(updated)
}

/// Delete a series unless an issue still references it
///
/// The guard and the delete are one statement, so an issue inserted
/// concurrently can never be left pointing at a removed series.
pub async fn delete(pool: &SqlitePool, id: SeriesId) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "DELETE FROM Series
         WHERE id = ?
           AND NOT EXISTS (SELECT 1 FROM Issue WHERE series_id = ?)",
    )
    .bind(id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        // Nothing was deleted; work out why before the transaction rolls back
        let existing = find_by_id::<Series>(&mut tx, id).await?;
        return Err(match existing {
            Some(_) => CatalogError::conflict(format!(
                "Series {id} still has issues and cannot be deleted"
            )),
            None => CatalogError::not_found("Series", id),
        });
    }

    tx.commit().await?;

    Ok(())
}

