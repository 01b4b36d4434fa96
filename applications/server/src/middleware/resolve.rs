/// Resolve-or-404 for every `:id` path segment
use crate::{error::ServerError, state::AppState};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use longbox_core::{Artist, Issue, Series};
use longbox_storage::Record;
use std::collections::HashMap;

/// A catalog row addressed by a named path parameter
pub trait PathResource: Record {
    /// Name of the route segment holding the id, e.g. `series_id`
    const PATH_PARAM: &'static str;
}

impl PathResource for Artist {
    const PATH_PARAM: &'static str = "artist_id";
}

impl PathResource for Series {
    const PATH_PARAM: &'static str = "series_id";
}

impl PathResource for Issue {
    const PATH_PARAM: &'static str = "issue_id";
}

/// Extractor that loads the row named in the path before the handler runs
///
/// A missing row (or an id that is not an integer) rejects with 404. A
/// storage failure during the lookup rejects with 500.
#[derive(Debug, Clone)]
pub struct Resolved<T>(pub T);

#[axum::async_trait]
impl<T> FromRequestParts<AppState> for Resolved<T>
where
    T: PathResource,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;

        let raw = params.get(T::PATH_PARAM).ok_or_else(|| {
            ServerError::Internal(format!("Route has no :{} segment", T::PATH_PARAM))
        })?;

        let not_found = || ServerError::NotFound(format!("{} not found", T::ENTITY));

        let id = raw.parse::<i64>().map_err(|_| not_found())?;

        state
            .catalog
            .resolve::<T>(id)
            .await?
            .map(Resolved)
            .ok_or_else(not_found)
    }
}
