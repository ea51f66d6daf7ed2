/// Liveness check
pub mod health;

/// Public configuration for external tooling
pub mod config;

pub use config::config_handler;
pub use health::{health_handler, HealthResponse};

use crate::config::AppConfig;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// API routes shared by the fullstack server and the standalone binary
pub fn api_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/config", get(config_handler))
        // Shared via Extension (NOT with_state) so it merges into the Dioxus router
        .layer(Extension(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = api_router(Arc::new(AppConfig::default()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_route() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_config_route_exposes_public_subset() {
        let (status, body) = get_json("/api/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["brand_title"], "AI Business");
        assert_eq!(body["image_domains"][0], "api.dicebear.com");
        assert!(body.get("user").is_none());
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_404() {
        let app = api_router(Arc::new(AppConfig::default()));
        let response = app
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
