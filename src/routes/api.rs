use crate::db::{Connector, LazyConnection};
use crate::handlers::{health_check, image_size, placeholder, ready_check};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes<C: Connector>(db: Arc<LazyConnection<C>>) -> Router {
    Router::<Arc<LazyConnection<C>>>::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check::<C>))
        .route("/v1/placeholder", get(placeholder))
        .route("/v1/image-size", get(image_size))
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fake::FakeConnector;
    use crate::db::ConnectOptions;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(connector: FakeConnector, target: Option<&'static str>) -> Router {
        let db = LazyConnection::new(
            connector,
            Box::new(move || target.map(str::to_string)),
            ConnectOptions::default(),
        );
        Router::new().nest("/api", create_api_routes(Arc::new(db)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(FakeConnector::open_gate(), None), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_ready_connects_database() {
        let connector = FakeConnector::open_gate();
        let (status, body) =
            get_json(app(connector.clone(), Some("mongodb://localhost/test")), "/api/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "imaginify");
        assert_eq!(connector.calls(), 1);
    }

    #[tokio::test]
    async fn test_ready_without_configuration_is_unavailable() {
        let connector = FakeConnector::open_gate();
        let (status, body) = get_json(app(connector.clone(), None), "/api/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], 503);
        assert_eq!(body["error"], "Error: MONGODB_URL is missing");
        assert_eq!(connector.calls(), 0);
    }

    #[tokio::test]
    async fn test_ready_reports_connection_failure() {
        let connector = FakeConnector::open_gate().failing_first(1);
        let (status, body) =
            get_json(app(connector, Some("mongodb://localhost/test")), "/api/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_image_size() {
        let app = app(FakeConnector::open_gate(), None);
        let (status, body) = get_json(
            app.clone(),
            "/api/v1/image-size?type=fill&aspect_ratio=3:4&dimension=height",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["size"], 1334);

        let (status, body) = get_json(app, "/api/v1/image-size?type=fill&dimension=depth").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_image_size_unknown_aspect_ratio_falls_back() {
        let app = app(FakeConnector::open_gate(), None);
        let (status, body) = get_json(
            app.clone(),
            "/api/v1/image-size?type=fill&aspect_ratio=4:3&dimension=width",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["size"], 1000);

        let (status, body) = get_json(
            app,
            "/api/v1/image-size?type=restore&aspect_ratio=bogus&width=640&dimension=width",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["size"], 640);
    }

    #[tokio::test]
    async fn test_placeholder() {
        let (status, body) = get_json(app(FakeConnector::open_gate(), None), "/api/v1/placeholder").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data_url"].as_str().unwrap().starts_with("data:image/svg+xml;base64,"));
    }
}
