//! Integration tests for the artists slice
//!
//! - Round-trip create/get with the default employment flag
//! - Full-replace updates
//! - Soft retirement: hidden from listings, still fetchable, idempotent

mod test_helpers;

use longbox_core::{storage::CatalogStore, types::*, CatalogError};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_artist() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let artist = catalog
        .create_artist(ArtistDraft {
            name: Some("A".to_string()),
            date_of_birth: Some("1950-01-01".to_string()),
            biography: Some("B".to_string()),
            is_currently_employed: None,
        })
        .await
        .expect("Failed to create artist");

    let fetched = catalog
        .get_artist(artist.id)
        .await
        .expect("Failed to get artist")
        .expect("Artist not found");

    assert_eq!(fetched, artist);
    assert_eq!(fetched.name, "A");
    assert_eq!(fetched.date_of_birth, "1950-01-01");
    assert_eq!(fetched.biography, "B");
    assert!(fetched.is_currently_employed);
}

#[tokio::test]
async fn test_create_unemployed_artist() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let mut draft = artist_draft("Steve Ditko");
    draft.is_currently_employed = Some(serde_json::json!(0));

    let artist = catalog.create_artist(draft).await.unwrap();
    assert!(!artist.is_currently_employed);

    let employed = catalog.list_employed_artists().await.unwrap();
    assert!(employed.is_empty());
}

#[tokio::test]
async fn test_missing_fields_write_nothing() {
    let test_db = TestDb::new().await;

    let result = test_db
        .catalog()
        .create_artist(ArtistDraft {
            name: Some("A".to_string()),
            ..ArtistDraft::default()
        })
        .await;

    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert_eq!(count_rows(test_db.pool(), "Artist").await, 0);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let artist = catalog.create_artist(artist_draft("Jack Kirby")).await.unwrap();

    let updated = catalog
        .update_artist(
            artist.id,
            ArtistDraft {
                name: Some("Jacob Kurtzberg".to_string()),
                date_of_birth: Some("1917-08-28".to_string()),
                biography: Some("Co-created the Fantastic Four".to_string()),
                is_currently_employed: Some(serde_json::json!(false)),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, artist.id);
    assert_eq!(updated.name, "Jacob Kurtzberg");
    assert_eq!(updated.date_of_birth, "1917-08-28");
    assert!(!updated.is_currently_employed);
}

#[tokio::test]
async fn test_update_unknown_artist_is_not_found() {
    let test_db = TestDb::new().await;

    let result = test_db
        .catalog()
        .update_artist(42, artist_draft("Nobody"))
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound { .. })));
}

#[tokio::test]
async fn test_retired_artist_hidden_but_fetchable() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let kept = catalog.create_artist(artist_draft("Kept")).await.unwrap();
    let retired = catalog.create_artist(artist_draft("Retired")).await.unwrap();

    catalog.retire_artist(retired.id).await.unwrap();

    let employed = catalog.list_employed_artists().await.unwrap();
    assert_eq!(employed.len(), 1);
    assert_eq!(employed[0].id, kept.id);

    let fetched = catalog.get_artist(retired.id).await.unwrap().unwrap();
    assert!(!fetched.is_currently_employed);
    assert_eq!(count_rows(test_db.pool(), "Artist").await, 2);
}

#[tokio::test]
async fn test_retire_is_idempotent() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let artist = catalog.create_artist(artist_draft("Twice")).await.unwrap();

    let first = catalog.retire_artist(artist.id).await.unwrap();
    let second = catalog.retire_artist(artist.id).await.unwrap();

    assert!(!first.is_currently_employed);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_retire_unknown_artist_is_not_found() {
    let test_db = TestDb::new().await;

    let result = test_db.catalog().retire_artist(7).await;
    assert!(matches!(result, Err(CatalogError::NotFound { .. })));
}

#[tokio::test]
async fn test_resolve_is_generic_over_tables() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let artist = catalog.create_artist(artist_draft("Resolved")).await.unwrap();

    let found: Option<Artist> = catalog.resolve(artist.id).await.unwrap();
    assert_eq!(found, Some(artist));

    let missing: Option<Series> = catalog.resolve(1).await.unwrap();
    assert!(missing.is_none());
}
