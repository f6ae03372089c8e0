use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::good::GoodResource;
use crate::order::OrderResource;
use crate::resource::api::{ResourceState, create_resource_router};
use crate::task::TaskResource;
use crate::user::UserResource;

/// The deployable services. Both may point at the same database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// `/tasks`
    Tasks,
    /// `/users`, `/goods` and `/orders`
    Shop,
}

impl Service {
    /// Builds the service's routes, without middleware.
    pub fn router(self, state: Arc<ResourceState>) -> Router {
        match self {
            Service::Tasks => create_resource_router::<TaskResource>(state),
            Service::Shop => Router::new()
                .merge(create_resource_router::<UserResource>(state.clone()))
                .merge(create_resource_router::<GoodResource>(state.clone()))
                .merge(create_resource_router::<OrderResource>(state)),
        }
    }
}

/// Builds the full application: service routes, health check and tracing.
pub fn create_app(service: Service, state: Arc<ResourceState>) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(service.router(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Opens the database, serves until a shutdown signal arrives, then closes the database.
#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config, service: Service) -> anyhow::Result<()> {
    let db = crate::db::connect(&config.db_url).await?;

    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let state = Arc::new(ResourceState {
        db: Arc::new(db.clone()),
    });
    let app = create_app(service, state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database connection closed");
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn can_answer_health_check() {
        let app = Router::new().route("/health", axum::routing::get(health_check_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }
}
