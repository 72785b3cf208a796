use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::{handlers, AppState};

/// Application routes. Static files and middleware are layered on in `main`.
pub fn configure_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route("/api/personas", get(handlers::dashboards::get_personas))
        .route("/api/dashboard", get(handlers::dashboards::get_dashboard))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() {
        let config = parse_config(
            "[server]\nhost = \"127.0.0.1\"\nport = 3000\n[static_files]\ndir = \"dist\"\n",
        )
        .unwrap();
        let app = configure_routes(Arc::new(AppState::new(config)));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }
}
