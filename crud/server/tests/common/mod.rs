use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use crud_server::resource::api::ResourceState;
use crud_server::web::{Service, create_app};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Opens a fresh in-memory database with all migrations applied.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    let db = crud_server::db::connect("sqlite::memory:").await?;
    Ok(db)
}

#[allow(dead_code)] // not every test binary drives the router
pub fn create_test_app(service: Service, db: DatabaseConnection) -> Router {
    let state = Arc::new(ResourceState { db: Arc::new(db) });
    create_app(service, state)
}

/// Sends one request through the router and decodes the JSON body.
///
/// Bodies that are not JSON come back as `Value::Null`.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
