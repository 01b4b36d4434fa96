/// Issues API routes, nested under a series
use crate::{error::Result, middleware::Resolved, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use longbox_core::{storage::CatalogStore, Issue, IssueDraft, Series};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct IssuePayload {
    #[serde(default)]
    pub issue: IssueDraft,
}

/// GET /api/series/:series_id/issues
pub async fn list_issues(
    State(app_state): State<AppState>,
    Resolved(series): Resolved<Series>,
) -> Result<Json<Value>> {
    let issues = app_state.catalog.list_issues(series.id).await?;
    Ok(Json(json!({ "issues": issues })))
}

/// POST /api/series/:series_id/issues
/// The new issue always belongs to the series in the path
pub async fn create_issue(
    State(app_state): State<AppState>,
    Resolved(series): Resolved<Series>,
    payload: Result<Json<IssuePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;

    let issue = app_state
        .catalog
        .create_issue(series.id, payload.issue)
        .await?;
    tracing::info!(issue_id = issue.id, series_id = series.id, "Created issue");

    Ok((StatusCode::CREATED, Json(json!({ "issue": issue }))))
}

/// PUT /api/series/:series_id/issues/:issue_id
pub async fn update_issue(
    State(app_state): State<AppState>,
    Resolved(series): Resolved<Series>,
    Resolved(issue): Resolved<Issue>,
    payload: Result<Json<IssuePayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload?;

    let issue = app_state
        .catalog
        .update_issue(series.id, issue.id, payload.issue)
        .await?;

    Ok(Json(json!({ "issue": issue })))
}

/// DELETE /api/series/:series_id/issues/:issue_id
pub async fn delete_issue(
    State(app_state): State<AppState>,
    Resolved(_series): Resolved<Series>,
    Resolved(issue): Resolved<Issue>,
) -> Result<StatusCode> {
    app_state.catalog.delete_issue(issue.id).await?;
    tracing::info!(issue_id = issue.id, "Deleted issue");

    Ok(StatusCode::NO_CONTENT)
}
