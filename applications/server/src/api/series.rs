/// Series API routes
use crate::{error::Result, middleware::Resolved, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use longbox_core::{storage::CatalogStore, Series, SeriesDraft};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct SeriesPayload {
    #[serde(default)]
    pub series: SeriesDraft,
}

/// GET /api/series
pub async fn list_series(State(app_state): State<AppState>) -> Result<Json<Value>> {
    let series = app_state.catalog.list_series().await?;
    Ok(Json(json!({ "series": series })))
}

/// GET /api/series/:series_id
pub async fn get_series(Resolved(series): Resolved<Series>) -> Json<Value> {
    Json(json!({ "series": series }))
}

/// POST /api/series
pub async fn create_series(
    State(app_state): State<AppState>,
    payload: Result<Json<SeriesPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;

    let series = app_state.catalog.create_series(payload.series).await?;
    tracing::info!(series_id = series.id, "Created series");

    Ok((StatusCode::CREATED, Json(json!({ "series": series }))))
}

/// PUT /api/series/:series_id
pub async fn update_series(
    State(app_state): State<AppState>,
    Resolved(series): Resolved<Series>,
    payload: Result<Json<SeriesPayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload?;

    let series = app_state
        .catalog
        .update_series(series.id, payload.series)
        .await?;

    Ok(Json(json!({ "series": series })))
}

/// DELETE /api/series/:series_id
/// Refused with 400 while any issue still belongs to the series
pub async fn delete_series(
    State(app_state): State<AppState>,
    Resolved(series): Resolved<Series>,
) -> Result<StatusCode> {
    app_state.catalog.delete_series(series.id).await?;
    tracing::info!(series_id = series.id, "Deleted series");

    Ok(StatusCode::NO_CONTENT)
}
