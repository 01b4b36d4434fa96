/// API route modules
pub mod artists;
pub mod health;
pub mod issues;
pub mod series;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router, nested under `/api`
pub fn router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        // Artists
        .route(
            "/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route(
            "/artists/:artist_id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::retire_artist),
        )
        // Series
        .route("/series", get(series::list_series).post(series::create_series))
        .route(
            "/series/:series_id",
            get(series::get_series)
                .put(series::update_series)
                .delete(series::delete_series),
        )
        // Issues, always reached through their series
        .route(
            "/series/:series_id/issues",
            get(issues::list_issues).post(issues::create_issue),
        )
        .route(
            "/series/:series_id/issues/:issue_id",
            axum::routing::put(issues::update_issue).delete(issues::delete_issue),
        );

    Router::new()
        .nest("/api", routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
