//! # Router-wide behaviour
//!
//! Health check, request IDs, cache headers and CORS.

mod common;

use std::sync::Arc;

use axum::body::Body;
use common::{app_with, into_json};
use http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use rigour_form_api::{
    app_builder::build_app,
    handler::FormState,
    usecase::{NotificationDispatcher, SubmissionUseCase, TemplateRenderer},
};
use rigour_infra::mock::MockNotificationSender;
use serde_json::json;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = app_with(Arc::new(MockNotificationSender::new()));

    let (status, body) = into_json(app.oneshot(get("/api/health")).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_generated_request_id_is_uuid_v7() {
    let app = app_with(Arc::new(MockNotificationSender::new()));

    let response = app.oneshot(get("/api/health")).await.unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(request_id.len(), 36);
    assert_eq!(&request_id[14..15], "7", "version nibble of {request_id}");
}

#[tokio::test]
async fn test_client_request_id_is_echoed() {
    let app = app_with(Arc::new(MockNotificationSender::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("x-request-id", "client-id-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "client-id-123");
}

#[tokio::test]
async fn test_responses_are_not_cacheable() {
    let app = app_with(Arc::new(MockNotificationSender::new()));

    let response = app.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app_with(Arc::new(MockNotificationSender::new()));

    let response = app.oneshot(get("/api/unknown")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn app_with_origins(origins: &[String]) -> axum::Router {
    let submissions = SubmissionUseCase::new(
        TemplateRenderer::new().unwrap(),
        NotificationDispatcher::new(Arc::new(MockNotificationSender::new()), None),
    );
    build_app(Arc::new(FormState { submissions }), Some(origins))
}

fn with_origin(origin: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_mirrors_any_origin_by_default() {
    let app = app_with(Arc::new(MockNotificationSender::new()));

    let response = app
        .oneshot(with_origin("https://preview.example.com"))
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://preview.example.com"
    );
}

#[tokio::test]
async fn test_cors_allow_list_admits_listed_origin_only() {
    let origins = vec!["https://rigourrealty.co.ke".to_string()];

    let allowed = app_with_origins(&origins)
        .oneshot(with_origin("https://rigourrealty.co.ke"))
        .await
        .unwrap();
    let denied = app_with_origins(&origins)
        .oneshot(with_origin("https://evil.example.com"))
        .await
        .unwrap();

    assert_eq!(
        allowed
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://rigourrealty.co.ke"
    );
    assert!(
        denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
