//! HTTP adapters - REST API implementations.

pub mod ahp;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use ahp::{ahp_routes, AhpAppState};

/// Builds the full application router: health check, AHP routes and the
/// shared middleware stack.
///
/// An empty `cors_origins` list allows any origin.
pub fn app_router(
    state: AhpAppState,
    cors_origins: &[String],
    request_timeout: Duration,
) -> Router {
    Router::new()
        .route("/health", get(ahp::handlers::health))
        .merge(ahp_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::model_source::StaticModelSource;
    use crate::application::handlers::ahp::{
        ComputePrioritiesHandler, EvaluateConfiguredModelHandler, EvaluateDecisionHandler,
        ReciprocityCheck,
    };
    use crate::domain::ahp::HierarchyAggregator;

    fn state() -> AhpAppState {
        let evaluate_handler = Arc::new(EvaluateDecisionHandler::new(
            HierarchyAggregator::new(),
            ReciprocityCheck::default(),
        ));
        AhpAppState {
            configured_model_handler: Arc::new(EvaluateConfiguredModelHandler::new(
                Arc::new(StaticModelSource::crew_scheduling()),
                evaluate_handler.clone(),
            )),
            evaluate_handler,
            priorities_handler: Arc::new(ComputePrioritiesHandler::new(
                10,
                ReciprocityCheck::default(),
            )),
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = app_router(state(), &[], Duration::from_secs(5));

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
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app_router(
            state(),
            &["http://localhost:5173".to_string()],
            Duration::from_secs(5),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
