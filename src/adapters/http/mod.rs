//! HTTP adapters - REST API implementation.
//!
//! - `hotel` - Hotel listing endpoints behind auth and the ticket gate
//! - `middleware` - Bearer token auth and the ticket gate
//! - `error` - Mapping of domain errors to status codes

pub mod error;
pub mod hotel;
pub mod middleware;

pub use error::{ApiError, ErrorResponse};
pub use hotel::{hotel_router, HotelAppState};

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// GET /health - Liveness probe, no auth
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the complete application router.
///
/// Mounts the hotel routes at `/hotels` and `/health` at the root, then wraps
/// everything in request tracing, the request deadline and, when origins are
/// configured, CORS.
pub fn app_router(state: HotelAppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/hotels", hotel_router(state))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    match cors_layer(&server.cors_origins_list()) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::memory::{InMemoryHotelStore, InMemoryRegistrationStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(server: &ServerConfig) -> Router {
        let registration = Arc::new(InMemoryRegistrationStore::new());
        let state = HotelAppState {
            session_validator: Arc::new(MockSessionValidator::new()),
            enrollment_reader: registration.clone(),
            ticket_reader: registration,
            hotel_reader: Arc::new(InMemoryHotelStore::new()),
        };
        app_router(state, server)
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn hotels_are_mounted_under_prefix() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/hotels").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/tickets").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_origin_gets_cors_headers() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };

        let response = app(&server)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:5173"))
        );
    }

    #[test]
    fn no_origins_means_no_cors_layer() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_none());
    }
}
