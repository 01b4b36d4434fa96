//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use longbox_server::{api, state::AppState};
use longbox_storage::{PoolSettings, SqliteCatalog};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a fresh catalog in a temporary `SQLite` file
pub struct TestApp {
    pub router: Router,
    pub catalog: Arc<SqliteCatalog>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("catalog.db").display());

        let catalog = SqliteCatalog::open(&db_url, &PoolSettings::default())
            .await
            .expect("Failed to open catalog");
        let catalog = Arc::new(catalog);

        let router = api::router(AppState::new(Arc::clone(&catalog)));

        Self {
            router,
            catalog,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Request bodies shaped the way clients send them
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn artist(name: &str) -> Value {
        json!({
            "artist": {
                "name": name,
                "dateOfBirth": "1950-01-01",
                "biography": "B"
            }
        })
    }

    pub fn series(name: &str) -> Value {
        json!({
            "series": {
                "name": name,
                "description": "Y"
            }
        })
    }

    pub fn issue(name: &str, artist_id: i64) -> Value {
        json!({
            "issue": {
                "name": name,
                "issueNumber": 1,
                "publicationDate": "1963-03-01",
                "artistId": artist_id
            }
        })
    }
}
