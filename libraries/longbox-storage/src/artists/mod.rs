use crate::record::find_by_id;
use longbox_core::{error::Result, types::*, CatalogError};
use sqlx::SqlitePool;

/// All artists that have not been retired
pub async fn get_all_employed(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let artists = sqlx::query_as::<_, Artist>(
        "SELECT id, name, date_of_birth, biography, is_currently_employed
         FROM Artist
         WHERE is_currently_employed = 1",
    )
    .fetch_all(pool)
    .await?;

    Ok(artists)
}

pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let mut conn = pool.acquire().await?;
    find_by_id::<Artist>(&mut conn, id).await
}

pub async fn create(pool: &SqlitePool, artist: NewArtist) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO Artist (name, date_of_birth, biography, is_currently_employed)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.date_of_birth)
    .bind(&artist.biography)
    .bind(artist.is_currently_employed)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    let created = find_by_id::<Artist>(&mut tx, id)
        .await?
        .ok_or_else(|| CatalogError::storage("Failed to retrieve created artist"))?;

    tx.commit().await?;

    Ok(created)
}

/// Replace name, date of birth, biography and employment status
pub async fn update(pool: &SqlitePool, id: ArtistId, artist: NewArtist) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE Artist
         SET name = ?, date_of_birth = ?, biography = ?, is_currently_employed = ?
         WHERE id = ?",
    )
    .bind(&artist.name)
    .bind(&artist.date_of_birth)
    .bind(&artist.biography)
    .bind(artist.is_currently_employed)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found("Artist", id));
    }

    let updated = find_by_id::<Artist>(&mut tx, id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Artist", id))?;

    tx.commit().await?;

    Ok(updated)
}

/// Soft delete: the row stays, only the employment flag is cleared
pub async fn retire(pool: &SqlitePool, id: ArtistId) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    // SQLite counts matched rows, so retiring twice still affects one row
    let result = sqlx::query("UPDATE Artist SET is_currently_employed = 0 WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found("Artist", id));
    }

    let retired = find_by_id::<Artist>(&mut tx, id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Artist", id))?;

    tx.commit().await?;

    Ok(retired)
}
