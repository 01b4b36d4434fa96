//! Primary-key lookup shared by every table

use longbox_core::{error::Result, Artist, Issue, Series};
use sqlx::{sqlite::SqliteRow, FromRow, SqliteConnection};

/// A row type addressable by its integer `id` column
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    /// Table the row lives in
    const TABLE: &'static str;

    /// Human-readable entity name for error messages
    const ENTITY: &'static str;
}

impl Record for Artist {
    const TABLE: &'static str = "Artist";
    const ENTITY: &'static str = "Artist";
}

impl Record for Series {
    const TABLE: &'static str = "Series";
    const ENTITY: &'static str = "Series";
}

impl Record for Issue {
    const TABLE: &'static str = "Issue";
    const ENTITY: &'static str = "Issue";
}

/// Fetch one row of `R` by primary key
///
/// Takes a bare connection so the same lookup works on a pooled
/// connection and inside a transaction.
pub async fn find_by_id<R: Record>(conn: &mut SqliteConnection, id: i64) -> Result<Option<R>> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", R::TABLE);

    let row = sqlx::query_as::<_, R>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row)
}
