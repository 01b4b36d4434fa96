/// Artists API routes
use crate::{error::Result, middleware::Resolved, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use longbox_core::{storage::CatalogStore, Artist, ArtistDraft};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct ArtistPayload {
    #[serde(default)]
    pub artist: ArtistDraft,
}

/// GET /api/artists
/// List artists that are currently employed
pub async fn list_artists(State(app_state): State<AppState>) -> Result<Json<Value>> {
    let artists = app_state.catalog.list_employed_artists().await?;
    Ok(Json(json!({ "artists": artists })))
}

/// GET /api/artists/:artist_id
pub async fn get_artist(Resolved(artist): Resolved<Artist>) -> Json<Value> {
    Json(json!({ "artist": artist }))
}

/// POST /api/artists
pub async fn create_artist(
    State(app_state): State<AppState>,
    payload: Result<Json<ArtistPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;

    let artist = app_state.catalog.create_artist(payload.artist).await?;
    tracing::info!(artist_id = artist.id, "Created artist");

    Ok((StatusCode::CREATED, Json(json!({ "artist": artist }))))
}

/// PUT /api/artists/:artist_id
/// Replace every mutable field of the artist
pub async fn update_artist(
    State(app_state): State<AppState>,
    Resolved(artist): Resolved<Artist>,
    payload: Result<Json<ArtistPayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload?;

    let artist = app_state
        .catalog
        .update_artist(artist.id, payload.artist)
        .await?;

    Ok(Json(json!({ "artist": artist })))
}

/// DELETE /api/artists/:artist_id
/// Retire the artist; the row is kept so issues can still reference it
pub async fn retire_artist(
    State(app_state): State<AppState>,
    Resolved(artist): Resolved<Artist>,
) -> Result<Json<Value>> {
    let artist = app_state.catalog.retire_artist(artist.id).await?;
    tracing::info!(artist_id = artist.id, "Retired artist");

    Ok(Json(json!({ "artist": artist })))
}
