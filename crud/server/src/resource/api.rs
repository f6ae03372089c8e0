use crate::resource::{Resource, ResourceService, ResourceServiceError};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// State shared by every resource router.
#[derive(Clone)]
pub struct ResourceState {
    pub db: Arc<DatabaseConnection>,
}

/// JSON response for API errors
#[derive(serde::Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// JSON response confirming a delete.
#[derive(serde::Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Custom error type for resource handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body could not be read as the expected JSON shape.
    #[error("Malformed payload: {0}")]
    Payload(#[from] JsonRejection),
    #[error(transparent)]
    Service(#[from] ResourceServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error, message) = match self {
            ApiError::Payload(rejection) => (
                rejection.status(),
                "INVALID_PAYLOAD",
                rejection.body_text(),
            ),
            ApiError::Service(ResourceServiceError::Validation(report)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_FAILED",
                report.to_string(),
            ),
            ApiError::Service(err @ ResourceServiceError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            ApiError::Service(err @ ResourceServiceError::Conflict(_)) => {
                (StatusCode::CONFLICT, "CONFLICT", err.to_string())
            }
            ApiError::Service(ResourceServiceError::Database(err)) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "An unexpected error occurred while processing your request. Please try again later."
                        .to_string(),
                )
            }
        };
        (
            status_code,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

/// Handler for GET /{resource}/ - Returns every record.
#[tracing::instrument(skip(state), fields(resource = R::PATH))]
pub async fn list_handler<R: Resource>(
    State(state): State<Arc<ResourceState>>,
) -> Result<Json<Vec<R::Model>>, ApiError> {
    let records = ResourceService::<R>::new(&state.db).list().await?;
    Ok(Json(records))
}

/// Handler for GET /{resource}/{id}
#[tracing::instrument(skip(state), fields(resource = R::PATH))]
pub async fn get_handler<R: Resource>(
    State(state): State<Arc<ResourceState>>,
    Path(id): Path<i32>,
) -> Result<Json<R::Model>, ApiError> {
    let record = ResourceService::<R>::new(&state.db).get(id).await?;
    Ok(Json(record))
}

/// Handler for POST /{resource}/
#[tracing::instrument(skip(state, payload), fields(resource = R::PATH))]
pub async fn create_handler<R: Resource>(
    State(state): State<Arc<ResourceState>>,
    payload: Result<Json<R::Payload>, JsonRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Json(payload) = payload?;
    let record = ResourceService::<R>::new(&state.db)
        .create(payload)
        .await?;
    tracing::info!("Created {}", R::LABEL);
    Ok(Json(record))
}

/// Handler for PUT /{resource}/{id}
#[tracing::instrument(skip(state, payload), fields(resource = R::PATH))]
pub async fn update_handler<R: Resource>(
    State(state): State<Arc<ResourceState>>,
    Path(id): Path<i32>,
    payload: Result<Json<R::Payload>, JsonRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Json(payload) = payload?;
    let record = ResourceService::<R>::new(&state.db)
        .update(id, payload)
        .await?;
    Ok(Json(record))
}

/// Handler for DELETE /{resource}/{id}
#[tracing::instrument(skip(state), fields(resource = R::PATH))]
pub async fn delete_handler<R: Resource>(
    State(state): State<Arc<ResourceState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    ResourceService::<R>::new(&state.db).delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("{} deleted", R::LABEL),
    }))
}

/// Creates the five CRUD routes for `R` under `/{R::PATH}`.
///
/// The collection answers both `/tasks` and `/tasks/`.
pub fn create_resource_router<R: Resource>(state: Arc<ResourceState>) -> Router {
    let collection = format!("/{}", R::PATH);
    let collection_with_slash = format!("/{}/", R::PATH);
    let item = format!("/{}/{{id}}", R::PATH);

    Router::new()
        .route(
            &collection,
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            &collection_with_slash,
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            &item,
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(state)
}
